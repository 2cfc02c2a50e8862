use std::env;

use program::perror;

extern crate rjs;
use rjs::core::{run_all, run_topic, Result};

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn run(result: Result<Vec<String>>) {
    match result {
        Ok(lines) => print_lines(&lines),
        Err(e) => perror(e),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => run(run_all()),
        2 => run(run_topic(&args[1])),
        _ => perror("usage: rjs [topic]".to_owned()),
    }
}
