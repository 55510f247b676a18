use crate::core::*;
use crate::error::*;

pub struct Arithmetic;

impl Module for Arithmetic {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            @ctx "+" (2 -> 1) => interpret_plus,
            @ctx "-" (2 -> 1) => interpret_minus,
            @ctx "*" (2 -> 1) => interpret_mul,
            @ctx "/" (2 -> 1) => interpret_div,
            @stk "=" (2 -> 1) => interpret_eq,
            @stk "<" (2 -> 1) => interpret_lt,
            @stk "<=" (2 -> 1) => interpret_le,
            @stk ">" (2 -> 1) => interpret_gt,
            @stk ">=" (2 -> 1) => interpret_ge,
            @stk "<>" (2 -> 1) => interpret_ne,
        });
        Ok(())
    }
}

fn interpret_plus(ctx: &mut Interp) -> Result<()> {
    let y = ctx.data.pop()?;
    let x = ctx.data.pop()?;
    ctx.data.push(ctx.width.add(x, y));
    Ok(())
}

fn interpret_minus(ctx: &mut Interp) -> Result<()> {
    let y = ctx.data.pop()?;
    let x = ctx.data.pop()?;
    ctx.data.push(ctx.width.sub(x, y));
    Ok(())
}

fn interpret_mul(ctx: &mut Interp) -> Result<()> {
    let y = ctx.data.pop()?;
    let x = ctx.data.pop()?;
    ctx.data.push(ctx.width.mul(x, y));
    Ok(())
}

fn interpret_div(ctx: &mut Interp) -> Result<()> {
    let y = ctx.data.pop()?;
    let x = ctx.data.pop()?;
    let q = ctx.width.floor_div(x, y)?;
    ctx.data.push(q);
    Ok(())
}

fn interpret_eq(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x == y) as Cell);
    Ok(())
}

fn interpret_lt(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x < y) as Cell);
    Ok(())
}

fn interpret_le(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x <= y) as Cell);
    Ok(())
}

fn interpret_gt(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x > y) as Cell);
    Ok(())
}

fn interpret_ge(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x >= y) as Cell);
    Ok(())
}

fn interpret_ne(stack: &mut Stack) -> Result<()> {
    let y = stack.pop()?;
    let x = stack.pop()?;
    stack.push((x != y) as Cell);
    Ok(())
}
