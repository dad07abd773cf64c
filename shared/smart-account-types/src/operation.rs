/// How a module-initiated transaction reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Operation {
    /// Independent call in the target's own storage context.
    Call = 0,
    /// Target code runs in the account's storage context.
    DelegateCall = 1,
}

impl TryFrom<u8> for Operation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Operation::Call),
            1 => Ok(Operation::DelegateCall),
            other => Err(other),
        }
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> u8 {
        op as u8
    }
}
