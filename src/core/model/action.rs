use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Create,
    Destroy,
    Increment,
    Reset,
    Count,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Destroy,
        Action::Increment,
        Action::Reset,
        Action::Count,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "iCreate",
            Action::Destroy => "iDestroy",
            Action::Increment => "iIncrement",
            Action::Reset => "iReset",
            Action::Count => "iCount",
        };
        f.write_str(name)
    }
}
