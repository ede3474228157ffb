use crate::libtango::jisho::Dataset;
use crate::libtango::mistakes::MistakeLog;
use crate::libtango::session::{Phase, Session, Submission};
use crate::Error;
use colored::Colorize;
use log::debug;
use rand::rngs::StdRng;
use text_io::read;

#[derive(Debug, PartialEq)]
enum HomeChoice {
    Practice,
    Mistakes,
    Quit,
    Unknown,
}

#[derive(Debug, PartialEq)]
enum PracticeChoice {
    Option(usize),
    Previous,
    Next,
    Home,
    Unknown,
}

impl HomeChoice {
    fn from_str(input: &str) -> HomeChoice {
        match input.trim() {
            "p" => HomeChoice::Practice,
            "m" => HomeChoice::Mistakes,
            "q" => HomeChoice::Quit,
            _ => HomeChoice::Unknown,
        }
    }
}

impl PracticeChoice {
    fn from_str(options_count: usize, input: &str) -> PracticeChoice {
        match input.trim() {
            "b" => PracticeChoice::Previous,
            "n" => PracticeChoice::Next,
            "h" => PracticeChoice::Home,
            input => match input.parse::<usize>() {
                Ok(num) if (1..=options_count).contains(&num) => PracticeChoice::Option(num - 1),
                Ok(_) => {
                    println!(
                        "{}",
                        format!("There are only {} options available!", options_count)
                            .bright_red()
                    );
                    PracticeChoice::Unknown
                }
                Err(_) => PracticeChoice::Unknown,
            },
        }
    }
}

pub fn run(dataset: Dataset, mut rng: StdRng) -> Result<(), Error> {
    let mut mistakes = MistakeLog::default();

    loop {
        println!();
        println!(
            "{}",
            format!(
                "==========> 単語練習しよう！ ({} words loaded) <==========",
                dataset.jisho.len()
            )
            .cyan()
        );
        println!("  {}. Practice", "p".bold());
        println!("  {}. Mistakes", "m".bold());
        println!("  {}. Quit", "q".bold());
        print!("{} ", "Pick one:".cyan());
        let input: String = read!("{}\n");

        match HomeChoice::from_str(&input) {
            HomeChoice::Practice => {
                let words: Vec<String> = dataset.jisho.words().map(str::to_string).collect();
                practice_loop(&dataset, &words, &mut mistakes, &mut rng)?;
            }
            HomeChoice::Mistakes => mistakes_screen(&dataset, &mut mistakes, &mut rng)?,
            HomeChoice::Quit => return Ok(()),
            HomeChoice::Unknown => println!("{}", "p, m or q!".bright_red()),
        }
    }
}

fn practice_loop(
    dataset: &Dataset,
    words: &[String],
    mistakes: &mut MistakeLog,
    rng: &mut StdRng,
) -> Result<(), Error> {
    let mut session = Session::start(words, &dataset.jisho, rng)?;

    loop {
        let Some(question) = session.current().cloned() else {
            println!("{}", "No words available.".yellow());
            return Ok(());
        };

        println!();
        let leading = format!("{}/{}. ", session.position(), session.total());
        println!(
            "{}{}",
            leading.cyan(),
            format!(" {} ", question.word).black().bold().on_white()
        );
        let indent = " ".repeat(leading.len());
        for (i, option) in question.options.iter().enumerate() {
            println!("{}{}. {}", indent, format!("{}", i + 1).bold(), option);
        }
        if let Some(answer) = session.current_answer() {
            println!("{}{}", indent, format!("(answered: {})", answer).dimmed());
        }
        println!("{}", format!("Score: {}", session.score()).cyan());
        if session.phase() == Phase::SetComplete {
            println!("{}", "You completed this set!".bright_green());
        }

        print!(
            "{} ",
            format!(
                "Answer (1-{}, b for previous, n for next, h for home):",
                question.options.len()
            )
            .cyan()
        );
        let choice_string: String = read!("{}\n");
        let choice = PracticeChoice::from_str(question.options.len(), choice_string.as_str());
        debug!("choice: {:?}", choice);

        match choice {
            PracticeChoice::Option(num) => {
                match session.submit(&question.options[num], mistakes) {
                    Submission::Correct => println!("{}", "Correct!".bright_green()),
                    Submission::Incorrect { correct } => {
                        println!("{}", "Incorrect!".bright_red());
                        println!(
                            "{}",
                            format!("The correct meaning was {:?}.", correct).green()
                        );
                    }
                    Submission::Rejected => {
                        println!("{}", "This question is already settled.".yellow())
                    }
                }
            }
            PracticeChoice::Previous => session.go_previous(),
            PracticeChoice::Next => session.go_next(&dataset.jisho, rng)?,
            PracticeChoice::Home => return Ok(()),
            PracticeChoice::Unknown => {}
        }
    }
}

fn mistakes_screen(
    dataset: &Dataset,
    mistakes: &mut MistakeLog,
    rng: &mut StdRng,
) -> Result<(), Error> {
    println!();
    println!(
        "{}",
        format!("==========> Mistakes ({} words) <==========", mistakes.len()).cyan()
    );
    if mistakes.is_empty() {
        println!("{}", "No mistakes yet!".bright_green());
        return Ok(());
    }

    for (word, count) in mistakes.iter() {
        println!("  {}: wrong {} time(s)", word.bold(), count);
    }
    print!(
        "{} ",
        "p to practice these words, anything else for home:".cyan()
    );
    let input: String = read!("{}\n");
    if input.trim() == "p" {
        let words = mistakes.words();
        practice_loop(dataset, &words, mistakes, rng)?;
    }
    Ok(())
}
