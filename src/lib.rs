pub use self::core::Interp;

pub mod core;
pub mod error;
pub mod modules;
pub mod util;

pub const PRELUDE: &str = include_str!("prelude.fth");

impl Interp<'_> {
    pub fn with_basic_words(self) -> error::Result<Self> {
        use modules::*;
        self.with_module(Arithmetic)?
            .with_module(StackUtils)?
            .with_module(MemoryUtils)?
            .with_module(Control)?
            .with_module(DebugUtils)
    }

    pub fn with_prelude(mut self) -> error::Result<Self> {
        let silent = std::mem::replace(&mut self.silent, true);
        let result = self.run(PRELUDE);
        self.silent = silent;
        result?;
        Ok(self)
    }
}
