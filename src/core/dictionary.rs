use ahash::HashMap;

use super::Interp;
use super::cell::Cell;
use super::stack::Stack;
use crate::error::*;

pub type StackWordFunc = fn(&mut Stack) -> Result<()>;
pub type ContextWordFunc = fn(&mut Interp<'_>) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub enum PrimFn {
    Stack(StackWordFunc),
    Context(ContextWordFunc),
}

// Pointer equality; this is what `install`'s structural dedup compares.
impl PartialEq for PrimFn {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Stack(a), Self::Stack(b)) => std::ptr::fn_addr_eq(*a, *b),
            (Self::Context(a), Self::Context(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for PrimFn {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    Lit(Cell),
    Call(usize),
    Ret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordDef {
    Primitive(PrimFn),
    Compound(Vec<Instr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub lin: usize,
    pub lout: usize,
    pub def: WordDef,
}

impl DictEntry {
    pub fn body_len(&self) -> usize {
        match &self.def {
            WordDef::Primitive(_) => 1,
            WordDef::Compound(ops) => ops.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Normal,
    Immediate,
}

#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    names: HashMap<String, usize>,
    speeds: HashMap<String, Speed>,
    pc_base: Vec<usize>,
    total_len: usize,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&DictEntry> {
        self.entries.get(index)
    }

    pub fn effect(&self, index: usize) -> (usize, usize) {
        let entry = &self.entries[index];
        (entry.lin, entry.lout)
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        if name.bytes().any(|b| b.is_ascii_lowercase()) {
            self.names.get(&name.to_ascii_uppercase()).copied()
        } else {
            self.names.get(name).copied()
        }
    }

    pub fn speed(&self, name: &str) -> Speed {
        let speed = if name.bytes().any(|b| b.is_ascii_lowercase()) {
            self.speeds.get(&name.to_ascii_uppercase())
        } else {
            self.speeds.get(name)
        };
        speed.copied().unwrap_or_default()
    }

    // The speed flag belongs to the binding, not the entry: another name may
    // reach the same entry at a different speed.
    pub fn bind(&mut self, name: &str, index: usize, speed: Speed) {
        let name = name.to_ascii_uppercase();
        self.speeds.insert(name.clone(), speed);
        self.names.insert(name, index);
    }

    pub fn install(&mut self, name: &str, entry: DictEntry, speed: Speed) -> usize {
        let index = match self.entries.iter().position(|e| *e == entry) {
            Some(index) => {
                tracing::debug!(word = name, index, "reusing structurally equal entry");
                index
            }
            None => {
                let index = self.entries.len();
                self.pc_base.push(self.total_len);
                self.total_len += entry.body_len();
                self.entries.push(entry);
                tracing::debug!(word = name, index, "installed entry");
                index
            }
        };
        self.bind(name, index, speed);
        index
    }

    pub fn define_stack_word(
        &mut self,
        name: &str,
        lin: usize,
        lout: usize,
        f: StackWordFunc,
    ) -> Result<()> {
        self.install(
            name,
            DictEntry {
                lin,
                lout,
                def: WordDef::Primitive(PrimFn::Stack(f)),
            },
            Speed::Normal,
        );
        Ok(())
    }

    pub fn define_context_word(
        &mut self,
        name: &str,
        lin: usize,
        lout: usize,
        f: ContextWordFunc,
    ) -> Result<()> {
        self.install(
            name,
            DictEntry {
                lin,
                lout,
                def: WordDef::Primitive(PrimFn::Context(f)),
            },
            Speed::Normal,
        );
        Ok(())
    }

    pub fn define_immediate_word(
        &mut self,
        name: &str,
        lin: usize,
        lout: usize,
        f: ContextWordFunc,
    ) -> Result<()> {
        self.install(
            name,
            DictEntry {
                lin,
                lout,
                def: WordDef::Primitive(PrimFn::Context(f)),
            },
            Speed::Immediate,
        );
        Ok(())
    }

    pub fn primitive(&self, index: usize) -> Option<PrimFn> {
        match self.entries.get(index)?.def {
            WordDef::Primitive(f) => Some(f),
            WordDef::Compound(_) => None,
        }
    }

    pub fn instr(&self, index: usize, offset: usize) -> Option<Instr> {
        match &self.entries.get(index)?.def {
            WordDef::Compound(ops) => ops.get(offset).copied(),
            WordDef::Primitive(_) => None,
        }
    }

    pub fn pc_base(&self, index: usize) -> usize {
        self.pc_base[index]
    }

    pub fn decode_pc(&self, pc: Cell) -> Result<(usize, usize)> {
        let Ok(pc) = usize::try_from(pc) else {
            return Err(Error::InvalidReturnStackItem(pc));
        };
        if pc >= self.total_len {
            return Err(Error::ReturnStackLookup(pc as i64));
        }
        let index = self.pc_base.partition_point(|&base| base <= pc) - 1;
        Ok((index, pc - self.pc_base[index]))
    }

    pub fn names(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names.iter().map(|(name, &index)| (name.as_str(), index))
    }

    pub fn orphans(&self) -> Vec<usize> {
        let mut reachable = vec![false; self.entries.len()];
        let mut queue = Vec::new();
        for &index in self.names.values() {
            if !std::mem::replace(&mut reachable[index], true) {
                queue.push(index);
            }
        }
        while let Some(index) = queue.pop() {
            if let WordDef::Compound(ops) = &self.entries[index].def {
                for op in ops {
                    if let Instr::Call(target) = *op {
                        if !std::mem::replace(&mut reachable[target], true) {
                            queue.push(target);
                        }
                    }
                }
            }
        }
        reachable
            .iter()
            .enumerate()
            .filter_map(|(index, &seen)| (!seen).then_some(index))
            .collect()
    }
}
