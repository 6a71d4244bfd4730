//! Screen stack and interactive loop.
//!
//! # Design
//! A stack navigator: the list is the root, details and the form push on
//! top, and `back`/save/delete pop. Whenever the list regains the top of
//! the stack it refetches, so mutations performed on other screens show up
//! immediately. Input and output are generic over `BufRead`/`Write`, which
//! makes whole sessions scriptable in tests.
//!
//! Every network call blocks the loop until it resolves or fails; there is
//! no cancellation and no retry.

use std::io::{BufRead, Write};

use anyhow::Result;
use todo_core::screen::{details, form, list};
use todo_core::{
    DetailsScreen, FormScreen, ListScreen, SortField, SortOrder, Status, Submission, TodoClient,
};
use tracing::warn;

use crate::render;
use crate::transport::Transport;

pub struct App {
    client: TodoClient,
    transport: Transport,
}

enum Screen {
    List(ListScreen),
    Details(DetailsScreen),
    Form(FormScreen),
}

/// What a dispatched command asks the loop to do next.
enum Outcome {
    Stay,
    Push(Screen),
    Pop,
    Quit,
}

impl App {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// Run the interactive session until `quit` or end of input.
    pub fn run(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let mut list_screen = ListScreen::new();
        self.refresh(&mut list_screen, out)?;
        let mut stack = vec![Screen::List(list_screen)];

        loop {
            match stack.last() {
                Some(Screen::List(screen)) => render::list(out, screen)?,
                Some(Screen::Details(screen)) => render::details(out, screen)?,
                Some(Screen::Form(screen)) => render::form(out, screen)?,
                None => break,
            }
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            let outcome = match stack.last_mut() {
                Some(Screen::List(screen)) => self.on_list(screen, line, out)?,
                Some(Screen::Details(screen)) => self.on_details(screen, line, input, out)?,
                Some(Screen::Form(screen)) => self.on_form(screen, line, out)?,
                None => break,
            };

            match outcome {
                Outcome::Stay => {}
                Outcome::Push(screen) => stack.push(screen),
                Outcome::Pop => {
                    stack.pop();
                    // The list regained focus; pick up server-side changes.
                    if let Some(Screen::List(screen)) = stack.last_mut() {
                        self.refresh(screen, out)?;
                    }
                }
                Outcome::Quit => break,
            }
        }
        Ok(())
    }

    /// Fetch under the current selections and fold the outcome in. A failed
    /// fetch alerts and leaves the previous collection on screen.
    fn refresh(&self, screen: &mut ListScreen, out: &mut impl Write) -> Result<()> {
        let outcome = self.transport.execute(screen.refresh_request(&self.client));
        if let Err(err) = screen.apply_refresh(&self.client, outcome) {
            warn!(error = %err, "list fetch failed");
            writeln!(out, "{}", list::FETCH_FAILED)?;
        }
        Ok(())
    }

    fn on_list(
        &self,
        screen: &mut ListScreen,
        line: &str,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        let (command, rest) = split_command(line);
        match command {
            "" => Ok(Outcome::Stay),
            "quit" | "q" | "exit" => Ok(Outcome::Quit),
            "add" => Ok(Outcome::Push(Screen::Form(FormScreen::create()))),
            "view" | "edit" => match parse_row(rest).and_then(|idx| screen.get(idx)) {
                Some(todo) => {
                    if command == "view" {
                        Ok(Outcome::Push(Screen::Details(DetailsScreen::new(todo.clone()))))
                    } else {
                        Ok(Outcome::Push(Screen::Form(FormScreen::edit(todo))))
                    }
                }
                None => {
                    writeln!(out, "No such row: {rest}")?;
                    Ok(Outcome::Stay)
                }
            },
            "status" => {
                if rest == "all" || rest.is_empty() {
                    screen.set_status_filter(None);
                } else {
                    match rest.parse::<Status>() {
                        Ok(status) => screen.set_status_filter(Some(status)),
                        Err(_) => {
                            writeln!(out, "Unknown status: {rest} (try: all, not started, in progress, completed)")?;
                            return Ok(Outcome::Stay);
                        }
                    }
                }
                self.refresh(screen, out)?;
                Ok(Outcome::Stay)
            }
            "search" => {
                screen.set_search(rest);
                self.refresh(screen, out)?;
                Ok(Outcome::Stay)
            }
            "sort" => {
                let sort = match rest {
                    "" | "none" | "default" => SortField::None,
                    "title" => SortField::Title,
                    "status" => SortField::Status,
                    _ => {
                        writeln!(out, "Unknown sort field: {rest} (try: none, title, status)")?;
                        return Ok(Outcome::Stay);
                    }
                };
                screen.set_sort(sort);
                self.refresh(screen, out)?;
                Ok(Outcome::Stay)
            }
            "order" => {
                let order = match rest {
                    "asc" => SortOrder::Ascending,
                    "desc" => SortOrder::Descending,
                    _ => {
                        writeln!(out, "Unknown order: {rest} (try: asc, desc)")?;
                        return Ok(Outcome::Stay);
                    }
                };
                screen.set_order(order);
                self.refresh(screen, out)?;
                Ok(Outcome::Stay)
            }
            "refresh" => {
                self.refresh(screen, out)?;
                Ok(Outcome::Stay)
            }
            _ => {
                writeln!(
                    out,
                    "Commands: status <all|not started|in progress|completed>, search [text], sort <none|title|status>, order <asc|desc>, view <n>, edit <n>, add, refresh, quit"
                )?;
                Ok(Outcome::Stay)
            }
        }
    }

    fn on_details(
        &self,
        screen: &mut DetailsScreen,
        line: &str,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        match line {
            "back" | "b" | "" => Ok(Outcome::Pop),
            "delete" => {
                write!(out, "Are you sure you want to delete this todo? [y/N] ")?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer)?;
                if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                    return Ok(Outcome::Stay);
                }

                let outcome = self.transport.execute(screen.delete_request(&self.client));
                match screen.apply_delete(&self.client, outcome) {
                    Ok(()) => {
                        writeln!(out, "{}", details::DELETED)?;
                        Ok(Outcome::Pop)
                    }
                    Err(err) => {
                        warn!(error = %err, "delete failed");
                        writeln!(out, "{}", details::DELETE_FAILED)?;
                        Ok(Outcome::Stay)
                    }
                }
            }
            _ => {
                writeln!(out, "Commands: delete, back")?;
                Ok(Outcome::Stay)
            }
        }
    }

    fn on_form(
        &self,
        screen: &mut FormScreen,
        line: &str,
        out: &mut impl Write,
    ) -> Result<Outcome> {
        let (command, rest) = split_command(line);
        match command {
            "title" => {
                screen.set_title(rest);
                Ok(Outcome::Stay)
            }
            "details" => {
                screen.set_details(rest);
                Ok(Outcome::Stay)
            }
            "status" => match rest.parse::<Status>() {
                Ok(status) => {
                    screen.set_status(status);
                    Ok(Outcome::Stay)
                }
                Err(_) => {
                    writeln!(out, "Unknown status: {rest} (try: not started, in progress, completed)")?;
                    Ok(Outcome::Stay)
                }
            },
            "cancel" | "back" => Ok(Outcome::Pop),
            "submit" => match screen.submit(&self.client) {
                Ok(Submission::Invalid(_)) => {
                    // The re-render shows every error next to its field.
                    Ok(Outcome::Stay)
                }
                Ok(Submission::Request(request)) => {
                    let outcome = self.transport.execute(request);
                    match screen.apply_submit(&self.client, outcome) {
                        Ok(_saved) => {
                            writeln!(out, "{}", form::SAVED)?;
                            Ok(Outcome::Pop)
                        }
                        Err(err) => {
                            warn!(error = %err, "save failed");
                            writeln!(out, "{}", form::SAVE_FAILED)?;
                            Ok(Outcome::Stay)
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "save failed");
                    writeln!(out, "{}", form::SAVE_FAILED)?;
                    Ok(Outcome::Stay)
                }
            },
            _ => {
                writeln!(out, "Commands: title <text>, details <text>, status <value>, submit, cancel")?;
                Ok(Outcome::Stay)
            }
        }
    }
}

/// Split a command line into its first word and the trimmed remainder.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

/// 1-based row number as typed, to a 0-based index.
fn parse_row(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok()?.checked_sub(1)
}
