use rand::prelude::Distribution;
use rand::Rng;
use texscan_testing::{Driver, Lexeme};

static RANDOM_CS_NAMES: [&str; 16] = [
    "section", "label", "ref", "cite", "emph", "textbf", "item", "par", "newcommand", "input",
    "makeatletter", "makeatother", "ExplSyntaxOn", "ExplSyntaxOff", "alpha", "relax",
];

static RANDOM_VERBATIM_ENVIRONMENTS: [&str; 4] = ["verbatim", "lstlisting", "minted", "comment"];

pub struct Weights {
    pub begin_group: u32,
    pub end_group: u32,
    pub space: u32,
    pub comment: u32,
    pub letter: u32,
    pub other: u32,
    pub math: u32,
    pub control_sequence: u32,
    pub verb: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            begin_group: 10,
            end_group: 10,
            space: 40,
            comment: 3,
            letter: 300,
            other: 50,
            math: 10,
            control_sequence: 60,
            verb: 5,
        }
    }
}

/// Generates a random LaTeX document with about the given number of lines.
///
/// Every `verbatim_every` lines a verbatim environment is inserted.
pub fn generate_random_latex_document(
    rng: &mut rand::prelude::StdRng,
    num_lines: usize,
    line_length_bounds: (usize, usize),
    verbatim_every: usize,
    weights: &Weights,
) -> String {
    let mut result = String::new();
    result.push_str("% This LaTeX document was randomly generated.\n");
    result.push_str("\\documentclass{article}\n\\begin{document}\n");
    let mut num_lines_generated: usize = 4;
    while num_lines_generated < num_lines {
        if verbatim_every > 0 && num_lines_generated % verbatim_every == 0 {
            let name =
                RANDOM_VERBATIM_ENVIRONMENTS[rng.gen_range(0..RANDOM_VERBATIM_ENVIRONMENTS.len())];
            result.push_str(&format!["\\begin{{{name}}}\n"]);
            result.push_str(&generate_random_latex_line(rng, line_length_bounds, weights));
            result.push_str(&format!["\\end{{{name}}}\n"]);
            num_lines_generated += 3;
            continue;
        }
        result.push_str(&generate_random_latex_line(rng, line_length_bounds, weights));
        num_lines_generated += 1;
    }
    result.push_str("\\end{document}\n");
    result
}

pub fn generate_random_latex_line(
    rng: &mut rand::prelude::StdRng,
    line_length_bounds: (usize, usize),
    weights: &Weights,
) -> String {
    let dist = rand::distributions::WeightedIndex::new([
        weights.begin_group,
        weights.end_group,
        weights.space,
        weights.comment,
        weights.letter,
        weights.other,
        weights.math,
        weights.control_sequence,
        weights.verb,
    ])
    .unwrap();

    let line_length = if line_length_bounds.1 <= line_length_bounds.0 {
        line_length_bounds.1
    } else {
        rng.gen_range(line_length_bounds.0..line_length_bounds.1 + 1)
    };
    let mut result = String::with_capacity(line_length + 20);
    let mut group_depth: u32 = 0;
    while result.len() < line_length {
        let temp;
        let s = match dist.sample(rng) {
            0 => {
                group_depth += 1;
                "{"
            }
            1 => {
                if group_depth == 0 {
                    continue;
                }
                group_depth -= 1;
                "}"
            }
            2 => " ",
            3 => {
                for _ in 0..group_depth {
                    result.push('}');
                }
                group_depth = 0;
                temp = match rng.gen_range(0..3) {
                    0 => "% !TEX program = lualatex".to_string(),
                    1 => "%: tag".to_string(),
                    _ => "% a comment {".to_string(),
                };
                result.push_str(&temp);
                break;
            }
            4 => {
                let ascii_offset = match rng.gen_range(0..4) {
                    0 => 65, // uppercase
                    _ => 97, // lowercase
                };
                temp = char::from_u32(ascii_offset + rng.gen_range(0..26))
                    .unwrap()
                    .to_string();
                &temp
            }
            5 => match rng.gen_range(0..6) {
                0 => "0",
                1 => "1",
                2 => ".",
                3 => ",",
                4 => "@",
                _ => "-",
            },
            6 => "$x^2_i$",
            7 => {
                temp = format![
                    "\\{} ",
                    RANDOM_CS_NAMES[rng.gen_range(0..RANDOM_CS_NAMES.len())]
                ];
                &temp
            }
            _ => r"\verb|a%b{|",
        };
        result.push_str(s);
    }
    for _ in 0..group_depth {
        result.push('}');
    }
    result.push('\n');
    result
}

/// Lexes the input with the LaTeX configuration.
pub fn run_in_texscan(input: &str) -> Vec<Lexeme> {
    Driver::new(texscan_latex::config()).lex(input)
}

/// Lexes the input with the LaTeX configuration, snapshotting and restoring the engine
///     after every token.
pub fn run_in_texscan_with_snapshots(input: &str) -> Vec<Lexeme> {
    Driver::new(texscan_latex::config())
        .resume_after_every_token(true)
        .lex(input)
}
