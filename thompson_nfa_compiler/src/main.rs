use std::process;

use thompson_nfa_compiler::{postfix, Compiler, State, NFA};

fn main() {
    let mut args = std::env::args().skip(1);
    let pattern = match args.next() {
        Some(pattern) => pattern,
        None => {
            eprintln!("usage: thompson_nfa_compiler <pattern> [input ...]");
            process::exit(2);
        }
    };

    println!("=== Pattern: '{}' ===", pattern);

    let tokens = match postfix::to_postfix(&pattern) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Failed to parse pattern: {}", e);
            process::exit(1);
        }
    };
    println!("Postfix: {}", postfix::render(&tokens));

    let nfa = match Compiler::new().build(&tokens) {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("Failed to compile: {}", e);
            process::exit(1);
        }
    };
    print_nfa(&nfa);

    for input in args {
        println!("{:?} => {}", input, if nfa.is_match(&input) { "match" } else { "no match" });
    }
}

fn print_nfa(nfa: &NFA) {
    println!("Start state: {}", nfa.start());
    println!("Match state: {}", nfa.match_state());
    println!("States:");

    for (id, state) in nfa.states().iter().enumerate() {
        print!("  {}: ", id);
        match state {
            State::Literal { ch, next } => println!("'{}' -> {}", ch, next),
            State::Split { alt1, alt2 } => println!("SPLIT -> {}, {}", alt1, alt2),
            State::Match => println!("MATCH"),
        }
    }
}
