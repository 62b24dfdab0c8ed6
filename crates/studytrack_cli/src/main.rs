//! Command-line frontend for studytrack.
//!
//! # Responsibility
//! - Act as the view coordinator: run one command against the stores, then
//!   re-render the calendar strip, task list and exam roster when the stores
//!   signal a change.
//! - Own UI-side concerns the core stays out of: the theme key, delete
//!   confirmation, the boot-time prune trigger.

use chrono::Local;
use std::cell::Cell;
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use studytrack_core::storage::THEME_KEY;
use studytrack_core::{
    calendar_strip, dates, default_log_level, init_logging, ExamStore, SqliteStorage, Storage,
    TaskStore, SUBJECTS,
};

const USAGE: &str = "\
studytrack <command>

commands:
  list [DATE|all]           show tasks (optionally filtered to an ISO date)
  add NAME DATE             create a task
  done ID                   toggle a task's completion
  edit ID                   remove a task and print its fields for re-entry
  rm ID                     delete a task
  exams                     show the exam roster
  exam-set [INDEX] SUBJ DATE  overwrite the exam at INDEX, or append
  exam-rm INDEX             delete the exam at INDEX (asks for confirmation)
  subjects                  list the available exam subjects
  prune                     remove exams dated before today
  theme [dark|light]        toggle or set the persisted theme
";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("studytrack: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let data_dir = data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        // Logging is best-effort; a read-only disk should not block usage.
        let _ = init_logging(default_log_level(), log_dir);
    }

    let storage = SqliteStorage::open(data_dir.join("studytrack.db"))?;
    let mut tasks = TaskStore::load(&storage)?;
    let mut exams = ExamStore::load(&storage)?;

    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    tasks.set_on_change(Box::new(move || flag.set(true)));
    let flag = Rc::clone(&dirty);
    exams.set_on_change(Box::new(move || flag.set(true)));

    let today = dates::today_local();
    // Boot prune: stale exams disappear before anything is rendered.
    exams.prune_expired(&today)?;
    dirty.set(false);

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["list"] => render(&tasks, &exams),
        ["list", "all"] => {
            tasks.select_date(None);
            dirty.set(true);
        }
        ["list", date] => tasks.select_date(Some((*date).to_string())),
        ["add", name, date] => {
            if tasks.create(name, date)?.is_none() {
                eprintln!("nothing added: name and date are both required");
            }
        }
        ["done", id] => {
            if !tasks.toggle_done(id.parse()?)? {
                eprintln!("no task with id {id}");
            }
        }
        ["edit", id] => match tasks.begin_edit(id.parse()?)? {
            Some(draft) => println!(
                "task removed; re-add it with: studytrack add \"{}\" {}",
                draft.name, draft.date
            ),
            None => eprintln!("no task with id {id}"),
        },
        ["rm", id] => {
            if !tasks.delete(id.parse()?)? {
                eprintln!("no task with id {id}");
            }
        }
        ["exams"] => render(&tasks, &exams),
        ["exam-set", subject, date] => {
            exams.upsert_by_index(None, subject, date)?;
            exams.prune_expired(&today)?;
        }
        ["exam-set", index, subject, date] => {
            exams.upsert_by_index(Some(index.parse()?), subject, date)?;
            exams.prune_expired(&today)?;
        }
        ["exam-rm", index] => {
            let index: usize = index.parse()?;
            if confirm_exam_delete(&exams, index) {
                exams.delete_by_index(Some(index))?;
                exams.prune_expired(&today)?;
            }
        }
        ["subjects"] => {
            for subject in SUBJECTS {
                println!("{subject}");
            }
        }
        ["prune"] => {
            let removed = exams.prune_expired(&today)?;
            println!("removed {removed} past exam(s)");
            dirty.set(true);
        }
        ["theme"] => {
            let next = match storage.get(THEME_KEY)?.as_deref() {
                Some("dark") => "light",
                _ => "dark",
            };
            storage.set(THEME_KEY, next)?;
            println!("theme: {next}");
        }
        ["theme", value @ ("dark" | "light")] => {
            storage.set(THEME_KEY, value)?;
            println!("theme: {value}");
        }
        _ => {
            eprint!("{USAGE}");
            return Ok(());
        }
    }

    if dirty.get() {
        render(&tasks, &exams);
    }
    Ok(())
}

/// Redraws everything from store state. Called whenever a store signalled a
/// change; the frontend always re-pulls, it never tracks diffs.
fn render(tasks: &TaskStore<'_>, exams: &ExamStore<'_>) {
    let today = Local::now().date_naive();
    let with_tasks = tasks.dates_with_tasks();
    let selected = tasks.selected_date();

    print!("calendar:");
    for day in calendar_strip(today, &with_tasks, selected) {
        let marker = if day.has_tasks { "*" } else { "" };
        if day.selected {
            print!(" [{}{marker}]", day.label);
        } else {
            print!(" {}{marker}", day.label);
        }
    }
    println!();

    match selected {
        Some(date) => println!("tasks for {}:", dates::format_display(date)),
        None => println!("all tasks:"),
    }
    for task in tasks.visible() {
        let mark = if task.done { "x" } else { " " };
        println!(
            "  [{mark}] {} {} ({})",
            task.id,
            task.name,
            dates::format_display(&task.date)
        );
    }

    println!("exams:");
    for (index, exam) in exams.all().iter().enumerate() {
        println!(
            "  {index}: {} - {}",
            exam.subject,
            dates::format_display(&exam.date)
        );
    }
}

fn confirm_exam_delete(exams: &ExamStore<'_>, index: usize) -> bool {
    let Some(exam) = exams.all().get(index) else {
        // Let the store report NoExamSelected.
        return true;
    };
    eprintln!(
        "delete exam {index}: {} - {}? [y/N]",
        exam.subject,
        dates::format_display(&exam.date)
    );
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn data_dir() -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = env::var_os("STUDYTRACK_DB_DIR") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::data_dir().ok_or("cannot determine a data directory")?;
    Ok(base.join("studytrack"))
}
