use std::collections::BTreeSet;

use quickcheck::{quickcheck, Arbitrary, Gen};
use thompson_regex::Regex;

const ALPHABET: &[char] = &['a', 'b', 'c'];

/// A randomly generated expression, rendered with explicit groups so that
/// its meaning never depends on operator precedence.
#[derive(Clone, Debug)]
enum Expr {
    Literal(char),
    Concat(Box<Expr>, Box<Expr>),
    Alternate(Box<Expr>, Box<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    Question(Box<Expr>),
}

impl Expr {
    fn generate(g: &mut Gen, depth: u32) -> Expr {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 6 };
        match choice {
            0 => Expr::Literal(*g.choose(ALPHABET).unwrap()),
            1 => Expr::Concat(Expr::boxed(g, depth - 1), Expr::boxed(g, depth - 1)),
            2 => Expr::Alternate(Expr::boxed(g, depth - 1), Expr::boxed(g, depth - 1)),
            3 => Expr::Star(Expr::boxed(g, depth - 1)),
            4 => Expr::Plus(Expr::boxed(g, depth - 1)),
            _ => Expr::Question(Expr::boxed(g, depth - 1)),
        }
    }

    fn boxed(g: &mut Gen, depth: u32) -> Box<Expr> {
        Box::new(Expr::generate(g, depth))
    }

    fn pattern(&self) -> String {
        match self {
            Expr::Literal(c) => c.to_string(),
            Expr::Concat(x, y) => format!("({})({})", x.pattern(), y.pattern()),
            Expr::Alternate(x, y) => format!("({}|{})", x.pattern(), y.pattern()),
            Expr::Star(x) => format!("({})*", x.pattern()),
            Expr::Plus(x) => format!("({})+", x.pattern()),
            Expr::Question(x) => format!("({})?", x.pattern()),
        }
    }

    /// Every position at which a match of `self` starting at `start` can end.
    fn ends(&self, text: &[char], start: usize) -> BTreeSet<usize> {
        match self {
            Expr::Literal(c) => {
                text.get(start).filter(|&t| t == c).map(|_| start + 1).into_iter().collect()
            }
            Expr::Concat(x, y) => {
                x.ends(text, start).into_iter().flat_map(|mid| y.ends(text, mid)).collect()
            }
            Expr::Alternate(x, y) => {
                let mut ends = x.ends(text, start);
                ends.extend(y.ends(text, start));
                ends
            }
            Expr::Star(x) => star_ends(x, text, [start].into_iter().collect()),
            Expr::Plus(x) => star_ends(x, text, x.ends(text, start)),
            Expr::Question(x) => {
                let mut ends = x.ends(text, start);
                ends.insert(start);
                ends
            }
        }
    }

    fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        self.ends(&text, 0).contains(&text.len())
    }

    /// A string this expression accepts.
    fn sample(&self, g: &mut Gen) -> String {
        match self {
            Expr::Literal(c) => c.to_string(),
            Expr::Concat(x, y) => x.sample(g) + &y.sample(g),
            Expr::Alternate(x, y) => {
                if bool::arbitrary(g) {
                    x.sample(g)
                } else {
                    y.sample(g)
                }
            }
            Expr::Star(x) => (0..u8::arbitrary(g) % 3).map(|_| x.sample(g)).collect(),
            Expr::Plus(x) => (0..1 + u8::arbitrary(g) % 3).map(|_| x.sample(g)).collect(),
            Expr::Question(x) => {
                if bool::arbitrary(g) {
                    x.sample(g)
                } else {
                    String::new()
                }
            }
        }
    }
}

/// Close `from` under further repetitions of `x`.
fn star_ends(x: &Expr, text: &[char], from: BTreeSet<usize>) -> BTreeSet<usize> {
    let mut ends = from.clone();
    let mut todo: Vec<usize> = from.into_iter().collect();
    while let Some(at) = todo.pop() {
        for end in x.ends(text, at) {
            if ends.insert(end) {
                todo.push(end);
            }
        }
    }
    ends
}

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Expr {
        Expr::generate(g, 4)
    }
}

/// A short haystack over the same alphabet as generated expressions.
#[derive(Clone, Debug)]
struct Haystack(String);

impl Arbitrary for Haystack {
    fn arbitrary(g: &mut Gen) -> Haystack {
        let len = usize::arbitrary(g) % 9;
        Haystack((0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect())
    }
}

#[test]
fn literal_pattern_matches_iff_equal() {
    fn prop(pattern: String, haystack: String) -> bool {
        let literal: String =
            pattern.chars().filter(|c| !"|*+?()".contains(*c)).collect();
        let re = Regex::new(&literal).unwrap();
        re.is_match(&literal) && re.is_match(&haystack) == (haystack == literal)
    }
    quickcheck(prop as fn(String, String) -> bool);
}

#[test]
fn star_accepts_only_repetitions() {
    fn prop(count: u8, haystack: String) -> bool {
        let re = Regex::new("a*").unwrap();
        re.is_match(&"a".repeat(count as usize))
            && re.is_match(&haystack) == haystack.chars().all(|c| c == 'a')
    }
    quickcheck(prop as fn(u8, String) -> bool);
}

#[test]
fn agrees_with_reference_matcher() {
    fn prop(expr: Expr, haystack: Haystack) -> bool {
        let re = Regex::new(&expr.pattern()).unwrap();
        re.is_match(&haystack.0) == expr.matches(&haystack.0)
    }
    quickcheck(prop as fn(Expr, Haystack) -> bool);
}

#[test]
fn accepts_generated_samples() {
    fn prop(expr: Expr) -> bool {
        let mut g = Gen::new(10);
        let re = Regex::new(&expr.pattern()).unwrap();
        (0..5).all(|_| re.is_match(&expr.sample(&mut g)))
    }
    quickcheck(prop as fn(Expr) -> bool);
}

#[test]
fn matching_is_deterministic() {
    fn prop(expr: Expr, haystack: Haystack) -> bool {
        let re = Regex::new(&expr.pattern()).unwrap();
        let first = re.is_match(&haystack.0);
        (0..3).all(|_| re.is_match(&haystack.0) == first)
    }
    quickcheck(prop as fn(Expr, Haystack) -> bool);
}
