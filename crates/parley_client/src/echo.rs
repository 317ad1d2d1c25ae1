//! A deterministic in-process chat service.

use parley_foundation::{Error, Result};

use crate::service::{ChatService, Target};

/// A local [`ChatService`] that derives replies from the message itself.
///
/// Two targets: `echo` repeats the message back, `shout` repeats it in
/// uppercase. Deterministic by design, which makes it the default
/// transport for the binary (real networking lives outside this
/// repository) and the collaborator of choice in tests.
pub struct EchoService {
    targets: Vec<Target>,
    current: usize,
    history: Vec<String>,
}

impl EchoService {
    /// Creates the service with its fixed target table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: vec![
                Target::new("echo", "Repeats the message back"),
                Target::new("shout", "Repeats the message in uppercase"),
            ],
            current: 0,
            history: Vec::new(),
        }
    }

    /// The messages sent since the last conversation reset.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn reply_for(&self, message: &str) -> String {
        match self.targets[self.current].name.as_str() {
            "shout" => message.to_uppercase(),
            _ => message.to_string(),
        }
    }
}

impl Default for EchoService {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatService for EchoService {
    fn targets(&self) -> Vec<Target> {
        self.targets.clone()
    }

    fn target(&self) -> String {
        self.targets[self.current].name.clone()
    }

    fn select_target(&mut self, name: &str) -> Result<()> {
        match self.targets.iter().position(|t| t.name == name) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(Error::service(format!("unknown target '{name}'"))),
        }
    }

    fn reset_conversation(&mut self) -> Result<()> {
        self.history.clear();
        Ok(())
    }

    fn send(&mut self, message: &str) -> Result<String> {
        self.history.push(message.to_string());
        Ok(self.reply_for(message))
    }

    fn send_streaming(&mut self, message: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<()> {
        let reply = self.send(message)?;
        for (i, word) in reply.split_whitespace().enumerate() {
            if i > 0 {
                on_chunk(" ");
            }
            on_chunk(word);
        }
        Ok(())
    }
}
