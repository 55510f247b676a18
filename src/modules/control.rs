use std::io::Write;

use crate::core::*;
use crate::error::*;

pub struct Control;

impl Module for Control {
    fn init(&self, d: &mut Dictionary) -> Result<()> {
        words!(d, {
            @ctx "]" (0 -> 0) => interpret_rbracket,
            @imm "[" (0 -> 0) => interpret_lbracket,
            @imm ";" (0 -> 0) => interpret_end,
            @imm ";im" (0 -> 0) => interpret_end_immediate,
            @imm ";r" (0 -> 0) => interpret_end_reduce,
            @imm ";imr" (0 -> 0) => interpret_end_immediate_reduce,
            @imm "literal" (1 -> 0) => interpret_literal,
            @imm "postpone" (0 -> 0) => interpret_postpone,
            @ctx "word" (0 -> 0) => interpret_word,
            @ctx "bd" (0 -> 0) => interpret_bd,
            @ctx "include" (0 -> 0) => interpret_include,
        });

        // `:` is the compound WORD BD ], assembled by hand because no
        // defining word exists yet to compile it.
        let mut colon = WordBuilder::new(":");
        for name in ["word", "bd", "]"] {
            let index = d
                .lookup(name)
                .ok_or_else(|| Error::UndefinedWord(name.to_ascii_uppercase()))?;
            let (lin, lout) = d.effect(index);
            colon.call(index, lin, lout);
        }
        colon.finish(d, Speed::Immediate, false);
        Ok(())
    }
}

fn interpret_rbracket(ctx: &mut Interp) -> Result<()> {
    if ctx.builder.is_none() {
        return Err(Error::NoDefinition);
    }
    ctx.mode = Mode::Compile;
    Ok(())
}

fn interpret_lbracket(ctx: &mut Interp) -> Result<()> {
    ctx.mode = Mode::Execute;
    Ok(())
}

fn interpret_end(ctx: &mut Interp) -> Result<()> {
    end_definition(ctx, Speed::Normal, false)
}

fn interpret_end_immediate(ctx: &mut Interp) -> Result<()> {
    end_definition(ctx, Speed::Immediate, false)
}

fn interpret_end_reduce(ctx: &mut Interp) -> Result<()> {
    end_definition(ctx, Speed::Normal, true)
}

fn interpret_end_immediate_reduce(ctx: &mut Interp) -> Result<()> {
    end_definition(ctx, Speed::Immediate, true)
}

fn end_definition(ctx: &mut Interp, speed: Speed, reduce: bool) -> Result<()> {
    let builder = ctx.builder.take().ok_or(Error::NoDefinition)?;
    if !ctx.silent && ctx.dictionary.lookup(builder.name()).is_some() {
        writeln!(ctx.stdout, "{} is redefined", builder.name())?;
    }
    builder.finish(&mut ctx.dictionary, speed, reduce);
    ctx.mode = Mode::Execute;
    Ok(())
}

fn interpret_literal(ctx: &mut Interp) -> Result<()> {
    let value = ctx.data.pop()?;
    ctx.builder.as_mut().ok_or(Error::NoDefinition)?.lit(value);
    Ok(())
}

fn interpret_postpone(ctx: &mut Interp) -> Result<()> {
    if !ctx.read_word() {
        return Err(Error::NoCreateTarget);
    }
    let token = ctx.pad.clone();
    if let Some(index) = ctx.dictionary.lookup(&token) {
        let (lin, lout) = ctx.dictionary.effect(index);
        ctx.builder
            .as_mut()
            .ok_or(Error::NoDefinition)?
            .call(index, lin, lout);
    } else {
        let value = ctx.parse_literal(&token)?;
        ctx.builder.as_mut().ok_or(Error::NoDefinition)?.lit(value);
    }
    Ok(())
}

fn interpret_word(ctx: &mut Interp) -> Result<()> {
    if !ctx.read_word() {
        return Err(Error::NoCreateTarget);
    }
    Ok(())
}

fn interpret_bd(ctx: &mut Interp) -> Result<()> {
    ctx.builder = Some(WordBuilder::new(ctx.pad.clone()));
    Ok(())
}

fn interpret_include(ctx: &mut Interp) -> Result<()> {
    // The path token is taken verbatim, bypassing PAD's upper-casing.
    let path = match ctx.input.scan_word() {
        Some(token) => token.to_owned(),
        None => return Err(Error::NoCreateTarget),
    };
    let contents = ctx
        .env
        .read_file(&path)
        .map_err(|_| Error::FileNotFound(path.clone()))?;
    tracing::debug!(path = %path, "include");
    ctx.input.prepend(&contents);
    Ok(())
}
