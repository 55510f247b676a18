use std::io::Write;

use crate::core::*;
use crate::error::*;
use crate::util;

pub struct DebugUtils;

impl Module for DebugUtils {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            @ctx "." (1 -> 0) => interpret_dot,
            @ctx "trace" (0 -> 2) => interpret_trace,
            @ctx "words" (0 -> 0) => interpret_words,
        });
        Ok(())
    }
}

fn interpret_dot(ctx: &mut Interp) -> Result<()> {
    let value = ctx.data.pop()?;
    if ctx.silent {
        return Ok(());
    }
    let base = ctx.memory.fetch(BASE_ADDR);
    write!(ctx.stdout, "{} ", util::format_cell(value, base))?;
    Ok(())
}

fn interpret_trace(ctx: &mut Interp) -> Result<()> {
    if !ctx.read_word() {
        return Err(Error::NoCreateTarget);
    }
    let index = ctx
        .dictionary
        .lookup(&ctx.pad)
        .ok_or_else(|| Error::UndefinedWord(ctx.pad.clone()))?;
    let (lin, lout) = ctx.dictionary.effect(index);
    ctx.data.push(lin as Cell);
    ctx.data.push(lout as Cell);
    Ok(())
}

fn interpret_words(ctx: &mut Interp) -> Result<()> {
    let mut names: Vec<&str> = ctx.dictionary.names().map(|(name, _)| name).collect();
    names.sort_unstable();
    for name in names {
        write!(ctx.stdout, "{name} ")?;
    }
    writeln!(ctx.stdout)?;
    Ok(())
}
