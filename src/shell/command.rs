
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    Add,
    Inspect,
    Delete,
    Save,
    Exit,
}

impl Command {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Inspect),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}
