use std::io::Write;

pub use self::builder::WordBuilder;
pub use self::cell::{Cell, CellWidth};
pub use self::dictionary::{
    ContextWordFunc, DictEntry, Dictionary, Instr, PrimFn, Speed, StackWordFunc, WordDef,
};
pub use self::env::{EmptyEnvironment, Environment, SystemEnvironment};
pub use self::lexer::Lexer;
pub use self::memory::{BASE_ADDR, DEFAULT_BASE, Memory};
pub use self::stack::Stack;

use crate::error::*;
use crate::util;

pub mod builder;
pub mod cell;
pub mod dictionary;
pub mod env;
pub mod lexer;
pub mod memory;
pub mod stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Execute,
    Compile,
}

pub struct Interp<'a> {
    pub data: Stack,
    pub ret: Stack,
    pub memory: Memory,
    pub dictionary: Dictionary,
    pub input: Lexer,
    pub pad: String,
    pub mode: Mode,
    pub builder: Option<WordBuilder>,
    pub width: CellWidth,
    pub silent: bool,
    pub env: &'a mut dyn Environment,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Interp<'a> {
    pub fn new(env: &'a mut dyn Environment, stdout: &'a mut dyn Write) -> Self {
        let mut memory = Memory::new();
        memory.place(DEFAULT_BASE);
        Self {
            data: Stack::new(),
            ret: Stack::new(),
            memory,
            dictionary: Dictionary::default(),
            input: Lexer::new(),
            pad: String::new(),
            mode: Mode::default(),
            builder: None,
            width: CellWidth::default(),
            silent: false,
            env,
            stdout,
        }
    }

    pub fn with_cell_size(mut self, bytes: u32) -> Result<Self> {
        self.width = CellWidth::new(bytes)?;
        Ok(self)
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_module<T: Module>(mut self, module: T) -> Result<Self> {
        self.add_module(module)?;
        Ok(self)
    }

    pub fn add_module<T: Module>(&mut self, module: T) -> Result<()> {
        module.init(&mut self.dictionary)
    }

    pub fn run(&mut self, source: &str) -> Result<()> {
        self.input.feed(source);
        if let Err(e) = self.drive().and_then(|()| self.check_at_rest()) {
            self.reset();
            return Err(e);
        }
        if !self.silent {
            writeln!(self.stdout, "ok")?;
        }
        Ok(())
    }

    pub fn trace(&self, name: &str) -> Result<(usize, usize)> {
        let index = self
            .dictionary
            .lookup(name)
            .ok_or_else(|| Error::UndefinedWord(name.to_ascii_uppercase()))?;
        Ok(self.dictionary.effect(index))
    }

    pub fn orphans(&self) -> Vec<usize> {
        self.dictionary.orphans()
    }

    pub fn stack(&self) -> &[Cell] {
        self.data.as_slice()
    }

    fn drive(&mut self) -> Result<()> {
        while self.read_word() {
            match self.pad.as_str() {
                "(" => {
                    if !self.input.skip_past(')') {
                        return Err(Error::UnterminatedComment);
                    }
                    continue;
                }
                "\\" => {
                    self.input.skip_line();
                    continue;
                }
                _ => {}
            }
            let token = self.pad.clone();
            match self.mode {
                Mode::Execute => self.execute_token(&token)?,
                Mode::Compile => self.compile_token(&token)?,
            }
        }
        Ok(())
    }

    fn check_at_rest(&self) -> Result<()> {
        if self.mode == Mode::Compile {
            return Err(Error::IncompleteProgram);
        }
        if self.ret.depth() != 0 {
            return Err(Error::ReturnStackNotEmpty);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.data.clear();
        self.ret.clear();
        self.builder = None;
        self.mode = Mode::Execute;
        self.input.clear();
    }

    pub(crate) fn read_word(&mut self) -> bool {
        self.pad.clear();
        match self.input.scan_word() {
            Some(token) => {
                self.pad.extend(token.chars().map(|c| c.to_ascii_uppercase()));
                true
            }
            None => false,
        }
    }

    fn execute_token(&mut self, token: &str) -> Result<()> {
        if let Some(index) = self.dictionary.lookup(token) {
            return self.invoke(index, token);
        }
        let value = self.parse_literal(token)?;
        self.data.push(value);
        Ok(())
    }

    fn compile_token(&mut self, token: &str) -> Result<()> {
        if let Some(index) = self.dictionary.lookup(token) {
            if self.dictionary.speed(token) == Speed::Immediate {
                return self.invoke(index, token);
            }
            let (lin, lout) = self.dictionary.effect(index);
            let builder = self.builder.as_mut().ok_or(Error::NoDefinition)?;
            builder.call(index, lin, lout);
            return Ok(());
        }
        let value = self.parse_literal(token)?;
        let builder = self.builder.as_mut().ok_or(Error::NoDefinition)?;
        builder.lit(value);
        Ok(())
    }

    // Lookup runs first, so a bound name starting with `#` wins over the
    // forced-decimal prefix.
    pub(crate) fn parse_literal(&self, token: &str) -> Result<Cell> {
        let (base, digits) = match token.strip_prefix('#') {
            Some(rest) => (10, rest),
            None => (self.memory.fetch(BASE_ADDR), token),
        };
        util::parse_cell(digits, base, self.width)
            .ok_or_else(|| Error::UndefinedWord(token.to_owned()))
    }

    pub fn invoke(&mut self, index: usize, token: &str) -> Result<()> {
        let (lin, lout) = self.dictionary.effect(index);
        if self.data.depth() < lin {
            return Err(Error::DataUnderflow(token.to_owned()));
        }
        let expected = self.data.depth() - lin + lout;
        tracing::trace!(word = token, index, "invoke");

        self.ret.push(self.dictionary.pc_base(index) as Cell);
        self.resolve()?;

        // Declared effects describe net data-stack motion across a full
        // coroutine cycle; words that park values on the return stack pass
        // this check only under that contract.
        if self.data.depth() != expected {
            return Err(Error::WordOutputSize(token.to_owned()));
        }
        Ok(())
    }

    fn resolve(&mut self) -> Result<()> {
        while let Some(pc) = self.ret.try_pop() {
            let (index, offset) = self.dictionary.decode_pc(pc)?;

            if let Some(f) = self.dictionary.primitive(index) {
                debug_assert_eq!(offset, 0);
                match f {
                    PrimFn::Stack(f) => f(&mut self.data)?,
                    PrimFn::Context(f) => f(self)?,
                }
                continue;
            }

            let mut offset = offset;
            loop {
                match self.dictionary.instr(index, offset) {
                    Some(Instr::Lit(value)) => {
                        self.data.push(value);
                        offset += 1;
                    }
                    Some(Instr::Call(target)) => {
                        let resume = self.dictionary.pc_base(index) + offset + 1;
                        self.ret.push(resume as Cell);
                        self.ret.push(self.dictionary.pc_base(target) as Cell);
                        break;
                    }
                    Some(Instr::Ret) | None => break,
                }
            }
        }
        Ok(())
    }
}

pub trait Module {
    fn init(&self, d: &mut Dictionary) -> Result<()>;
}
