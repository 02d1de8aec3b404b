//! Walk through equality, disjunction, conjunction, sequences and
//! Peano arithmetic, printing the states each goal produces.

use micro_kanren::prelude::*;
use micro_kanren::{run, Result};

fn problem(description: &str) {
    println!("[*] Problem: {}", description);
}

fn print_states(goal: impl Goal) -> Result<()> {
    let start = State::empty();
    println!("{}", start);
    for state in goal.pursue_in(start) {
        println!("{}", state?);
    }
    println!();
    Ok(())
}

fn numbers(terms: Vec<Term>) -> Result<Vec<u64>> {
    terms.iter().map(from_peano).collect()
}

fn lists(terms: Vec<Term>) -> Result<Vec<Vec<Term>>> {
    terms.iter().map(to_list).collect()
}

fn main() -> Result<()> {
    problem("x = 5, from a state with variables (x, y, z)");
    let (start, [x, _y, _z]) = State::with_variables(["x", "y", "z"]);
    println!("{}", start);
    for state in equal(x, 5).pursue_in(start) {
        println!("{}", state?);
    }
    println!();

    problem("x = 5");
    print_states(with_variables(["x"], |[x]| equal(x, 5)))?;

    problem("either x = 5 or y = 6");
    print_states(with_variables(["x", "y"], |[x, y]| {
        either(equal(x, 5), equal(y, 6))
    }))?;

    problem("both x = 5 and y = 7");
    print_states(with_variables(["x", "y"], |[x, y]| {
        both(equal(x, 5), equal(y, 7))
    }))?;

    problem("both a = 7 and (b = 5 or b = 6)");
    print_states(with_variables(["a", "b"], |[a, b]| {
        both(equal(a, 7), either(equal(b, 5), equal(b, 6)))
    }))?;

    problem("both x = 1 and x = 2");
    print_states(with_variables(["x"], |[x]| both(equal(x, 1), equal(2, x))))?;

    problem("(3 . x) = (y . (5 . y))");
    print_states(with_variables(["x", "y"], |[x, y]| {
        equal(Term::cons(3, x), Term::cons(y, Term::cons(5, y)))
    }))?;

    problem("appending 'he' and 'llo' gives x");
    let he = from_list(vec!["h", "e"]);
    let llo = from_list(vec!["l", "l", "o"]);
    if let Some(answer) = run!((x), append(he.clone(), llo.clone(), x)).next() {
        println!("{:?}\n", lists(answer?)?);
    }

    problem("appending x and 'lo' gives 'hello'");
    let hello = from_list(vec!["h", "e", "l", "l", "o"]);
    let whole = hello.clone();
    if let Some(answer) = run!((x), append(x, from_list(vec!["l", "o"]), whole.clone())).next() {
        println!("{:?}\n", lists(answer?)?);
    }

    problem("appending x and y gives 'hello'");
    for answer in run!((x, y), append(x, y, hello.clone())) {
        println!("{:?}", lists(answer?)?);
    }
    println!();

    problem("5 + 3 = x");
    for answer in run!((x), add(to_peano(5), to_peano(3), x)) {
        println!("{:?}", numbers(answer?)?);
    }
    println!();

    problem("x + 3 = 8");
    for answer in run!((x), add(x, to_peano(3), to_peano(8))) {
        println!("{:?}", numbers(answer?)?);
    }
    println!();

    problem("x + y = 8");
    for answer in run!((x, y), add(x, y, to_peano(8))) {
        println!("{:?}", numbers(answer?)?);
    }
    println!();

    problem("3 * 8 = x");
    if let Some(answer) = run!((x), multiply(to_peano(3), to_peano(8), x)).next() {
        println!("{:?}\n", numbers(answer?)?);
    }

    problem("x * y = 24");
    for answer in run!((x, y), multiply(x, y, to_peano(24))).take(8) {
        println!("{:?}", numbers(answer?)?);
    }

    Ok(())
}
