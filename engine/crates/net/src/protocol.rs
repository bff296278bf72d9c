/// A decoded controller command. Produced once by decoding a read chunk,
/// consumed once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Wire payload `"1"`: boost / jump signal.
    Boost,
    /// Wire payload `"0"`: stop signal.
    Stop,
    /// Any other token; carried for diagnostics, never acted on.
    Unknown(String),
}

impl Command {
    /// Map a decoded text chunk to a command. The protocol is unframed text,
    /// one command per read; surrounding whitespace (trailing newlines from
    /// interactive clients) is ignored. An empty chunk is no command.
    pub fn parse(raw: &str) -> Option<Command> {
        let token = raw.trim();
        match token {
            "" => None,
            "1" => Some(Command::Boost),
            "0" => Some(Command::Stop),
            other => Some(Command::Unknown(other.to_string())),
        }
    }
}
