use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use hbs_ledger::{BookingReader, BookingWriter, InMemoryLedger, LedgerConfig, LedgerError};
use hbs_types::{Booking, BookingId, NewBooking};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::shell::Shell;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddBooking,
    ViewByCustomer,
    UpdateStatus,
    DeleteBooking,
    LongestStay,
    Summary,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>().map_err(|_| ())? {
            0 => Ok(Self::Exit),
            1 => Ok(Self::AddBooking),
            2 => Ok(Self::ViewByCustomer),
            3 => Ok(Self::UpdateStatus),
            4 => Ok(Self::DeleteBooking),
            5 => Ok(Self::LongestStay),
            6 => Ok(Self::Summary),
            _ => Err(()),
        }
    }
}

/// Whether the menu loop should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

const MENU: &str = "\
1. Add a booking
2. View bookings for a customer
3. Update booking status
4. Delete a booking
5. View booking with the longest stay
6. Show total bookings and check if hotel is full
0. Exit";

/// Build the ledger from the command line (prompting for the capacity when
/// it was not given) and run the menu until exit or end of input.
pub fn run_session<R: BufRead, W: Write>(cli: &Cli, shell: &mut Shell<R, W>) -> anyhow::Result<()> {
    let capacity = match cli.capacity {
        Some(capacity) => capacity,
        None => match shell
            .prompt_number::<usize>("Enter the maximum booking capacity for the hotel: ")?
        {
            Some(capacity) => capacity,
            None => return Ok(()),
        },
    };

    let config = LedgerConfig {
        capacity,
        reject_duplicate_ids: cli.reject_duplicate_ids,
    };
    info!(capacity, reject_duplicate_ids = config.reject_duplicate_ids, "ledger ready");
    let mut ledger = InMemoryLedger::new(config);
    run_menu(shell, &mut ledger)
}

/// Show the menu and dispatch choices against `ledger`.
pub fn run_menu<R, W, L>(shell: &mut Shell<R, W>, ledger: &mut L) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    L: BookingReader + BookingWriter,
{
    loop {
        shell.say(format!("\n{}", "--- Hotel Reservation System ---".bold()))?;
        shell.say(MENU)?;
        let Some(line) = shell.prompt("Choose an option: ")? else {
            return Ok(());
        };

        let Ok(choice) = line.parse::<MenuChoice>() else {
            debug!(input = %line, "invalid menu choice");
            shell.say(format!("{} Invalid choice. Please try again.", "✗".red()))?;
            continue;
        };

        debug!(?choice, "menu choice");
        if run_choice(shell, ledger, choice)? == Flow::Exit {
            return Ok(());
        }
    }
}

fn run_choice<R, W, L>(shell: &mut Shell<R, W>, ledger: &mut L, choice: MenuChoice) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingReader + BookingWriter,
{
    match choice {
        MenuChoice::Exit => {
            shell.say("Exiting the system.")?;
            Ok(Flow::Exit)
        }
        MenuChoice::AddBooking => cmd_add(shell, ledger),
        MenuChoice::ViewByCustomer => cmd_view(shell, ledger),
        MenuChoice::UpdateStatus => cmd_update_status(shell, ledger),
        MenuChoice::DeleteBooking => cmd_delete(shell, ledger),
        MenuChoice::LongestStay => cmd_longest_stay(shell, ledger),
        MenuChoice::Summary => cmd_summary(shell, ledger),
    }
}

/// Collect the fields of a new booking. `None` means input ended.
fn read_new_booking<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> anyhow::Result<Option<NewBooking>> {
    let Some(id) = shell.prompt_number::<BookingId>("Enter Booking ID: ")? else { return Ok(None) };
    let Some(customer_name) = shell.prompt("Enter Customer Name: ")? else { return Ok(None) };
    let Some(room_type) = shell.prompt("Enter Room Type (Single/Double/Suite): ")? else { return Ok(None) };
    let Some(booking_date) = shell.prompt("Enter Booking Date (YYYY-MM-DD): ")? else { return Ok(None) };
    let Some(check_in_date) = shell.prompt("Enter Check-in Date (YYYY-MM-DD): ")? else { return Ok(None) };
    let Some(check_out_date) = shell.prompt("Enter Check-out Date (YYYY-MM-DD): ")? else { return Ok(None) };
    let Some(room_rate) = shell.prompt_number::<f64>("Enter Room Rate: ")? else { return Ok(None) };
    let Some(status) = shell.prompt("Enter Booking Status (Confirmed/Pending/Cancelled): ")? else { return Ok(None) };
    let Some(owner_name) = shell.prompt("Enter Associated Customer Name: ")? else { return Ok(None) };

    Ok(Some(NewBooking {
        id,
        customer_name,
        room_type,
        booking_date,
        check_in_date,
        check_out_date,
        room_rate,
        status: Some(status),
        owner_name,
    }))
}

fn cmd_add<R, W, L>(shell: &mut Shell<R, W>, ledger: &mut L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingReader + BookingWriter,
{
    let Some(request) = read_new_booking(shell)? else {
        return Ok(Flow::Exit);
    };

    let booking = match Booking::new(request) {
        Ok(booking) => booking,
        Err(err) => {
            shell.say(format!("{} Booking not added: {err}", "✗".red()))?;
            return Ok(Flow::Continue);
        }
    };

    match ledger.insert(booking) {
        Ok(()) => shell.say(format!("{} Booking added successfully.", "✓".green()))?,
        Err(LedgerError::CapacityExceeded { .. }) => {
            shell.say(format!("{} Hotel is fully booked.", "✗".red()))?
        }
        Err(LedgerError::DuplicateId { id }) => shell.say(format!(
            "{} A booking with ID {id} already exists.",
            "✗".red()
        ))?,
        Err(err) => shell.say(format!("{} {err}", "✗".red()))?,
    }
    Ok(Flow::Continue)
}

fn cmd_view<R, W, L>(shell: &mut Shell<R, W>, ledger: &L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingReader,
{
    let Some(name) = shell.prompt("Enter customer name to view bookings: ")? else {
        return Ok(Flow::Exit);
    };

    let bookings = ledger.list_by_customer(&name);
    if bookings.is_empty() {
        shell.say(format!("No bookings found for {}.", name.bold()))?;
    }
    for booking in bookings {
        print_booking(shell, booking)?;
    }
    Ok(Flow::Continue)
}

fn cmd_update_status<R, W, L>(shell: &mut Shell<R, W>, ledger: &mut L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingWriter,
{
    let Some(id) = shell.prompt_number::<BookingId>("Enter Booking ID to update status: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(owner) = shell.prompt("Enter your name to confirm identity: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(new_status) = shell.prompt("Enter new status (Confirmed, Pending, Cancelled): ")? else {
        return Ok(Flow::Exit);
    };

    match ledger.update_status(id, &new_status, &owner) {
        Ok(_) => shell.say(format!(
            "{} Booking status updated to {}.",
            "✓".green(),
            new_status.yellow()
        ))?,
        Err(_) => shell.say(format!(
            "{} Booking not found or you're not authorized to update this booking.",
            "✗".red()
        ))?,
    }
    Ok(Flow::Continue)
}

fn cmd_delete<R, W, L>(shell: &mut Shell<R, W>, ledger: &mut L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingWriter,
{
    let Some(id) = shell.prompt_number::<BookingId>("Enter Booking ID to delete: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(owner) = shell.prompt("Enter your name to confirm identity: ")? else {
        return Ok(Flow::Exit);
    };

    match ledger.delete(id, &owner) {
        Ok(_) => shell.say(format!("{} Booking deleted successfully.", "✓".green()))?,
        Err(_) => shell.say(format!(
            "{} Booking not found or you're not authorized to delete this booking.",
            "✗".red()
        ))?,
    }
    Ok(Flow::Continue)
}

fn cmd_longest_stay<R, W, L>(shell: &mut Shell<R, W>, ledger: &L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingReader,
{
    match ledger.longest_stay() {
        Some(booking) => {
            shell.say(format!("\n{}", "--- Booking with the Longest Stay ---".bold()))?;
            print_booking(shell, booking)?;
        }
        None => shell.say("No bookings available.")?,
    }
    Ok(Flow::Continue)
}

fn cmd_summary<R, W, L>(shell: &mut Shell<R, W>, ledger: &L) -> anyhow::Result<Flow>
where
    R: BufRead,
    W: Write,
    L: BookingReader,
{
    shell.say(format!("\nTotal Bookings: {}", ledger.count().to_string().bold()))?;
    let full = if ledger.is_full() { "Yes".red() } else { "No".green() };
    shell.say(format!("Is the hotel full? {full}"))?;
    Ok(Flow::Continue)
}

fn print_booking<R: BufRead, W: Write>(shell: &mut Shell<R, W>, booking: &Booking) -> anyhow::Result<()> {
    match shell.format() {
        OutputFormat::Text => shell.say(format!("{booking}\n"))?,
        OutputFormat::Json => shell.say(serde_json::to_string_pretty(booking)?)?,
    }
    Ok(())
}
