pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid cell size: {0}")]
    InvalidCellSize(u32),

    #[error("Undefined word: {0}")]
    UndefinedWord(String),
    #[error("Data stack underflow: {0}")]
    DataUnderflow(String),
    #[error("Word output size error: {0}")]
    WordOutputSize(String),

    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid memory address: {0}")]
    InvalidAddress(i64),

    #[error("Incomplete ( comment")]
    UnterminatedComment,
    #[error("Incomplete program")]
    IncompleteProgram,
    #[error("Return stack must be emptied")]
    ReturnStackNotEmpty,
    #[error("Invalid return stack item: {0}")]
    InvalidReturnStackItem(i64),
    #[error("Return stack lookup failure: {0}")]
    ReturnStackLookup(i64),

    #[error("No definition in progress")]
    NoDefinition,
    #[error("No target for create")]
    NoCreateTarget,
    #[error("File not found: {0}")]
    FileNotFound(String),
}
