mod config;

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tictactoe_engine::{
    Mark, Outcome, Session, calculate_minimax_move, evaluate, format_board, log, logger,
    parse_board,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively against the minimax bot (or a second human).
    Play,
    /// Print the bot's move for a given position, e.g. "XX.O.....".
    Analyze {
        board: String,
        #[arg(long, default_value = "O")]
        mark: String,
    },
}

fn main() {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_prefix.clone());

    let result = match args.command.unwrap_or(Command::Play) {
        Command::Play => run_game(&config),
        Command::Analyze { board, mark } => run_analyze(&board, &mark),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_analyze(board_str: &str, mark_str: &str) -> Result<(), String> {
    let board = parse_board(board_str)?;
    let mark = parse_mark(mark_str)?;

    let idx = calculate_minimax_move(&board, mark)?;
    println!("Best move for {}: {}", mark.to_char(), idx);

    let mut after = board;
    after[idx] = mark;
    match evaluate(&after) {
        Outcome::Won { mark, line } => {
            println!("{} wins on line {:?}", mark.to_char(), line)
        }
        Outcome::Draw => println!("The game ends in a draw"),
        Outcome::Ongoing => {}
    }

    Ok(())
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match s {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        _ => Err(format!("Invalid mark '{}', expected X or O", s)),
    }
}

fn run_game(config: &config::Config) -> Result<(), String> {
    let mut session = Session::new(&config.session)?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Cells are numbered 0-8, left to right, top to bottom.");

    loop {
        render_board(&session);

        if session.game.is_over() {
            print_round_result(&session);

            print!("[n]ext round, [a] reset all, [q]uit: ");
            flush_stdout();
            let Some(input) = read_line(&mut lines) else {
                return Ok(());
            };

            match input.as_str() {
                "n" | "" => session.reset_board(),
                "a" => session.reset_all(),
                "q" => return Ok(()),
                other => println!("Unknown command '{}'", other),
            }
            continue;
        }

        if session.is_bot_turn() {
            // Pacing only; the move itself does not depend on the delay.
            if config.session.bot_delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.session.bot_delay_ms));
            }

            let idx = session.play_bot_turn()?;
            log!(
                "Computer placed {} at cell {} ({})",
                session.game.board[idx].to_char(),
                idx,
                format_board(&session.game.board)
            );
            continue;
        }

        print!("{} to move (0-8, q to quit): ", session.game.current_mark.to_char());
        flush_stdout();
        let Some(input) = read_line(&mut lines) else {
            return Ok(());
        };

        if input == "q" {
            return Ok(());
        }

        let idx = match input.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => {
                println!("Enter a cell number between 0 and 8");
                continue;
            }
        };

        if let Err(e) = session.place_human_mark(idx) {
            println!("{}", e);
        }
    }
}

fn render_board(session: &Session) {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                match session.game.board[idx] {
                    Mark::Empty => idx.to_string(),
                    mark => mark.to_char().to_string(),
                }
            })
            .collect();
        println!(" {} ", cells.join(" | "));
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn print_round_result(session: &Session) {
    match session.game.winner() {
        Some(mark) => {
            let side = match session.bot_mark {
                Some(bot_mark) if bot_mark == mark => "the computer",
                Some(_) => "you",
                None => "",
            };
            if side.is_empty() {
                println!("{} wins!", mark.to_char());
            } else {
                println!("{} wins ({})!", mark.to_char(), side);
            }
            if let Some(line) = session.game.winning_line() {
                println!("Winning line: {:?}", line);
            }
        }
        None => println!("Draw!"),
    }

    println!(
        "Score: X {} / O {} / draws {}",
        session.scores.x_wins, session.scores.o_wins, session.scores.draws
    );
}

fn flush_stdout() {
    let _ = std::io::stdout().flush();
}

fn read_line(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}
