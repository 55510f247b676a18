use crate::core::*;
use crate::error::*;

pub struct StackUtils;

impl Module for StackUtils {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            @stk "drop" (1 -> 0) => interpret_drop,
            @stk "dup" (1 -> 2) => interpret_dup,
            @stk "swap" (2 -> 2) => interpret_swap,
            @stk "over" (2 -> 3) => interpret_over,
            @stk "tuck" (2 -> 3) => interpret_tuck,
            @stk "rot" (3 -> 3) => interpret_rot,
            @stk "-rot" (3 -> 3) => interpret_rot_rev,
            @ctx ">r" (1 -> 0) => interpret_to_r,
            @ctx "r>" (0 -> 1) => interpret_r_from,
        });
        Ok(())
    }
}

fn interpret_drop(stack: &mut Stack) -> Result<()> {
    stack.pop()?;
    Ok(())
}

fn interpret_dup(stack: &mut Stack) -> Result<()> {
    stack.push(stack.fetch(0)?);
    Ok(())
}

fn interpret_swap(stack: &mut Stack) -> Result<()> {
    stack.swap(0, 1)
}

fn interpret_over(stack: &mut Stack) -> Result<()> {
    stack.push(stack.fetch(1)?);
    Ok(())
}

fn interpret_tuck(stack: &mut Stack) -> Result<()> {
    stack.swap(0, 1)?;
    stack.push(stack.fetch(1)?);
    Ok(())
}

fn interpret_rot(stack: &mut Stack) -> Result<()> {
    stack.swap(1, 2)?;
    stack.swap(0, 1)
}

fn interpret_rot_rev(stack: &mut Stack) -> Result<()> {
    stack.swap(0, 1)?;
    stack.swap(1, 2)
}

// The topmost return stack entry is the resume point of the word being
// executed; the user value moves just beneath it.

fn interpret_to_r(ctx: &mut Interp) -> Result<()> {
    let resume = ctx.ret.try_pop();
    let value = ctx.data.pop()?;
    ctx.ret.push(value);
    if let Some(pc) = resume {
        ctx.ret.push(pc);
    }
    Ok(())
}

fn interpret_r_from(ctx: &mut Interp) -> Result<()> {
    let resume = ctx.ret.try_pop();
    let value = ctx.ret.pop()?;
    ctx.data.push(value);
    if let Some(pc) = resume {
        ctx.ret.push(pc);
    }
    Ok(())
}
