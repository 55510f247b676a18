use crate::core::*;
use crate::error::*;

pub struct MemoryUtils;

impl Module for MemoryUtils {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            @ctx "," (1 -> 0) => interpret_comma,
            @ctx "here" (0 -> 1) => interpret_here,
            @ctx "@" (1 -> 1) => interpret_fetch,
            @ctx "!" (2 -> 0) => interpret_store,
            @stk "base" (0 -> 1) => interpret_base,
            @ctx "cell" (0 -> 1) => interpret_cell,
        });
        Ok(())
    }
}

fn interpret_comma(ctx: &mut Interp) -> Result<()> {
    let value = ctx.data.pop()?;
    ctx.memory.place(value);
    Ok(())
}

fn interpret_here(ctx: &mut Interp) -> Result<()> {
    ctx.data.push(ctx.memory.here() as Cell);
    Ok(())
}

fn interpret_fetch(ctx: &mut Interp) -> Result<()> {
    let addr = ctx.data.pop()?;
    ctx.data.push(ctx.memory.fetch(addr));
    Ok(())
}

fn interpret_store(ctx: &mut Interp) -> Result<()> {
    let addr = ctx.data.pop()?;
    let value = ctx.data.pop()?;
    ctx.memory.store(addr, value)
}

fn interpret_base(stack: &mut Stack) -> Result<()> {
    stack.push(BASE_ADDR);
    Ok(())
}

fn interpret_cell(ctx: &mut Interp) -> Result<()> {
    ctx.data.push(ctx.width.bytes() as Cell);
    Ok(())
}
