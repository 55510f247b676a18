macro_rules! words {
    ($d:ident, {
        $(@$t:tt $name:literal ($lin:literal -> $lout:literal) => $expr:expr),*$(,)?
    }) => {
        $(words!(@$t, $d, $name, $lin, $lout, $expr)?;)*
    };

    (@stk, $d:ident, $lit:literal, $lin:literal, $lout:literal, $expr:expr) => {
        $d.define_stack_word($lit, $lin, $lout, $expr)
    };
    (@ctx, $d:ident, $lit:literal, $lin:literal, $lout:literal, $expr:expr) => {
        $d.define_context_word($lit, $lin, $lout, $expr)
    };
    (@imm, $d:ident, $lit:literal, $lin:literal, $lout:literal, $expr:expr) => {
        $d.define_immediate_word($lit, $lin, $lout, $expr)
    };
}

pub use self::arithmetic::Arithmetic;
pub use self::control::Control;
pub use self::debug_utils::DebugUtils;
pub use self::memory_utils::MemoryUtils;
pub use self::stack_utils::StackUtils;

mod arithmetic;
mod control;
mod debug_utils;
mod memory_utils;
mod stack_utils;
