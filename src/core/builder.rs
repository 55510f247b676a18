use super::cell::Cell;
use super::dictionary::{DictEntry, Dictionary, Instr, Speed, WordDef};

#[derive(Debug)]
pub struct WordBuilder {
    name: String,
    lin: usize,
    lout: usize,
    body: Vec<Instr>,
}

impl WordBuilder {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            lin: 0,
            lout: 0,
            body: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect(&self) -> (usize, usize) {
        (self.lin, self.lout)
    }

    pub fn lit(&mut self, value: Cell) {
        self.body.push(Instr::Lit(value));
        self.lout += 1;
    }

    pub fn call(&mut self, index: usize, nlin: usize, nlout: usize) {
        // d > 0 means the callee reaches below the accumulated top.
        let d = nlin as isize - self.lout as isize;
        if d > 0 {
            self.lin += d as usize;
        }
        self.lout = nlout;
        if d < 0 {
            self.lout += (-d) as usize;
        }
        self.body.push(Instr::Call(index));
    }

    pub fn finish(mut self, dictionary: &mut Dictionary, speed: Speed, reduce: bool) -> usize {
        self.body.push(Instr::Ret);

        if reduce && self.body.len() == 2 {
            if let Instr::Call(index) = self.body[0] {
                dictionary.bind(&self.name, index, speed);
                return index;
            }
        }

        dictionary.install(
            &self.name,
            DictEntry {
                lin: self.lin,
                lout: self.lout,
                def: WordDef::Compound(self.body),
            },
            speed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary_with_stack_words() -> Dictionary {
        let mut d = Dictionary::default();
        // Effects mirror the standard stack words.
        d.install("over", entry(2, 3), Speed::Normal);
        d.install("dup", entry(1, 2), Speed::Normal);
        d.install("-rot", entry(3, 3), Speed::Normal);
        d.install("+", entry(2, 1), Speed::Normal);
        d
    }

    fn entry(lin: usize, lout: usize) -> DictEntry {
        DictEntry {
            lin,
            lout,
            def: WordDef::Compound(vec![Instr::Lit(lin as Cell), Instr::Lit(lout as Cell), Instr::Ret]),
        }
    }

    fn call(b: &mut WordBuilder, d: &Dictionary, name: &str) {
        let index = d.lookup(name).unwrap();
        let (lin, lout) = d.effect(index);
        b.call(index, lin, lout);
    }

    #[test]
    fn induces_the_net_effect() {
        let d = dictionary_with_stack_words();
        let mut b = WordBuilder::new("tst");
        call(&mut b, &d, "over");
        call(&mut b, &d, "dup");
        call(&mut b, &d, "-rot");
        call(&mut b, &d, "+");
        assert_eq!(b.effect(), (2, 3));
    }

    #[test]
    fn literals_extend_the_output() {
        let d = dictionary_with_stack_words();
        let mut b = WordBuilder::new("tst");
        b.lit(1);
        b.lit(2);
        call(&mut b, &d, "+");
        assert_eq!(b.effect(), (0, 1));
    }

    #[test]
    fn calls_below_the_accumulated_top_deepen_lin() {
        let d = dictionary_with_stack_words();
        let mut b = WordBuilder::new("tst");
        b.lit(1);
        call(&mut b, &d, "+");
        assert_eq!(b.effect(), (1, 1));
    }

    #[test]
    fn finish_appends_ret() {
        let mut d = dictionary_with_stack_words();
        let mut b = WordBuilder::new("tst");
        b.lit(7);
        let index = b.finish(&mut d, Speed::Normal, false);
        assert_eq!(
            d.entry(index).unwrap().def,
            WordDef::Compound(vec![Instr::Lit(7), Instr::Ret])
        );
        assert_eq!(d.effect(index), (0, 1));
    }

    #[test]
    fn reduce_binds_single_call_bodies_to_the_callee() {
        let mut d = dictionary_with_stack_words();
        let plus = d.lookup("+").unwrap();
        let mut b = WordBuilder::new("add");
        call(&mut b, &d, "+");
        let index = b.finish(&mut d, Speed::Normal, true);
        assert_eq!(index, plus);
        assert_eq!(d.lookup("add"), Some(plus));
    }

    #[test]
    fn reduce_still_installs_single_literal_bodies() {
        let mut d = dictionary_with_stack_words();
        let before = d.len();
        let mut b = WordBuilder::new("one");
        b.lit(1);
        let index = b.finish(&mut d, Speed::Normal, true);
        assert_eq!(index, before);
        assert_eq!(d.lookup("one"), Some(index));
    }

    #[test]
    fn without_reduce_a_wrapper_gets_its_own_entry() {
        let mut d = dictionary_with_stack_words();
        let plus = d.lookup("+").unwrap();
        let mut b = WordBuilder::new("add");
        call(&mut b, &d, "+");
        let index = b.finish(&mut d, Speed::Normal, false);
        assert_ne!(index, plus);
    }
}
