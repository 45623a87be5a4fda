/// The nine menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    PrintAll,
    PrintSorted,
    AddStudent,
    WeightingInfo,
    PrintStudent,
    RemoveStudent,
    ClearAll,
    Exit,
    SetWeighting,
}

impl MenuCommand {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuCommand::PrintAll),
            2 => Some(MenuCommand::PrintSorted),
            3 => Some(MenuCommand::AddStudent),
            4 => Some(MenuCommand::WeightingInfo),
            5 => Some(MenuCommand::PrintStudent),
            6 => Some(MenuCommand::RemoveStudent),
            7 => Some(MenuCommand::ClearAll),
            8 => Some(MenuCommand::Exit),
            9 => Some(MenuCommand::SetWeighting),
            _ => None,
        }
    }

    /// Parse a raw input token. Anything that is not an integer in 1-9 is None.
    pub fn parse(token: &str) -> Option<Self> {
        token.trim().parse::<i64>().ok().and_then(Self::from_choice)
    }
}
