use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::config::{ConfigManager, ReportConfig};
use crate::errors::LedgerError;
use crate::ledger::{EntryKind, Ledger, ReportPeriod};
use crate::locale::format_rupiah;
use crate::report;

use super::output;
use super::CliError;

/// Whether the shell loop keeps reading after a command.
pub enum LoopControl {
    Continue,
    Exit,
}

/// Live shell state: one ledger for the active period plus the stored report
/// settings.
pub struct ShellContext {
    ledger: Ledger,
    config: ReportConfig,
    manager: ConfigManager,
}

impl ShellContext {
    pub fn new() -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let today = chrono::Local::now().date_naive();
        let period = ReportPeriod::new(today.month(), today.year())?;
        Ok(Self {
            ledger: Ledger::new(period, 0),
            config,
            manager,
        })
    }

    pub fn prompt(&self) -> String {
        format!("kas [{}]> ", self.ledger.period().label())
    }

    /// Dispatches one tokenized command line.
    pub fn handle(&mut self, tokens: &[String]) -> Result<LoopControl, LedgerError> {
        let Some((command, args)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        match command.as_str() {
            "period" => self.cmd_period(args)?,
            "opening" => self.cmd_opening(args)?,
            "add" => self.cmd_add(args)?,
            "delete" => self.cmd_delete(args)?,
            "list" | "report" => self.cmd_report()?,
            "totals" => self.cmd_totals(),
            "chair" => self.cmd_name(args, true)?,
            "treasurer" => self.cmd_name(args, false)?,
            "export" => self.cmd_export(args)?,
            "reset" => self.cmd_reset(),
            "help" => print_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => {
                output::warning(format!("unknown command `{other}`; try `help`"));
            }
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_period(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let (month, year) = match args {
            [month, year] => (
                parse_number(month, "month")?,
                parse_number(year, "year")?,
            ),
            _ => {
                return Err(LedgerError::validation(
                    "arguments",
                    "usage: period <month> <year>",
                ))
            }
        };
        let month = u32::try_from(month)
            .map_err(|_| LedgerError::validation("month", format!("`{month}` is not a month")))?;
        let year = i32::try_from(year)
            .map_err(|_| LedgerError::validation("year", format!("`{year}` is out of range")))?;
        let period = ReportPeriod::new(month, year)?;
        let opening = self.ledger.opening_balance();
        self.ledger.reset(period, opening);
        output::success(format!("period set to {}", period.label()));
        Ok(())
    }

    fn cmd_opening(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let amount = match args {
            [amount] => parse_number(amount, "amount")?,
            _ => {
                return Err(LedgerError::validation(
                    "arguments",
                    "usage: opening <amount>",
                ))
            }
        };
        if amount < 0 {
            return Err(LedgerError::validation(
                "amount",
                "opening balance must be non-negative",
            ));
        }
        self.ledger.set_opening_balance(amount);
        output::success(format!("opening balance set to {}", format_rupiah(amount)));
        Ok(())
    }

    fn cmd_add(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let (date, kind, amount, description) = match args {
            [date, kind, amount, description @ ..] if !description.is_empty() => (
                self.parse_date(date)?,
                parse_kind(kind)?,
                parse_number(amount, "amount")?,
                description.join(" "),
            ),
            _ => {
                return Err(LedgerError::validation(
                    "arguments",
                    "usage: add <date> <credit|debit> <amount> <description…>",
                ))
            }
        };
        self.ledger.add_item(date, &description, kind, amount)?;
        output::success(format!(
            "recorded {} of {} on {}",
            match kind {
                EntryKind::Credit => "credit",
                EntryKind::Debit => "debit",
            },
            format_rupiah(amount),
            date,
        ));
        Ok(())
    }

    fn cmd_delete(&mut self, args: &[String]) -> Result<(), LedgerError> {
        let index = match args {
            [index] => parse_number(index, "index")? as usize,
            _ => {
                return Err(LedgerError::validation(
                    "arguments",
                    "usage: delete <index>",
                ))
            }
        };
        self.ledger.delete_item(index)?;
        output::success(format!("deleted item {index}"));
        Ok(())
    }

    fn cmd_report(&self) -> Result<(), LedgerError> {
        let layout = report::build(
            self.ledger.snapshot(),
            self.ledger.period(),
            &self.config.chair_name,
            &self.config.treasurer_name,
        )?;
        println!("{}", report::render_report(&layout));
        Ok(())
    }

    fn cmd_totals(&self) {
        let totals = self.ledger.totals();
        output::info(format!("total debet    {}", format_rupiah(totals.credit_total)));
        output::info(format!("total kredit   {}", format_rupiah(totals.debit_total)));
        output::info(format!(
            "saldo akhir    {}",
            format_rupiah(totals.closing_balance)
        ));
    }

    fn cmd_name(&mut self, args: &[String], chair: bool) -> Result<(), LedgerError> {
        if args.is_empty() {
            return Err(LedgerError::validation(
                "arguments",
                "usage: chair|treasurer <name…>",
            ));
        }
        let name = args.join(" ");
        if chair {
            self.config.chair_name = name;
        } else {
            self.config.treasurer_name = name;
        }
        self.manager.save(&self.config)?;
        output::success("signatory saved");
        Ok(())
    }

    fn cmd_export(&self, args: &[String]) -> Result<(), LedgerError> {
        let period = self.ledger.period();
        let path = match args {
            [] => self.default_export_path(period),
            [path] => PathBuf::from(path),
            _ => {
                return Err(LedgerError::validation(
                    "arguments",
                    "usage: export [path]",
                ))
            }
        };
        let layout = report::build(
            self.ledger.snapshot(),
            period,
            &self.config.chair_name,
            &self.config.treasurer_name,
        )?;
        report::write_xlsx(&layout, &path)?;
        output::success(format!("report written to {}", path.display()));
        Ok(())
    }

    fn cmd_reset(&mut self) {
        let period = self.ledger.period();
        let opening = self.ledger.opening_balance();
        let removed = self.ledger.entry_count();
        self.ledger.reset(period, opening);
        output::success(format!("ledger reset, {removed} entries removed"));
    }

    fn default_export_path(&self, period: ReportPeriod) -> PathBuf {
        let filename = report::report_filename(period, "xlsx");
        match &self.config.export_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }

    /// Accepts a full `YYYY-MM-DD` date or a bare day of the active month.
    fn parse_date(&self, raw: &str) -> Result<NaiveDate, LedgerError> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        let period = self.ledger.period();
        raw.parse::<u32>()
            .ok()
            .and_then(|day| NaiveDate::from_ymd_opt(period.year(), period.month(), day))
            .ok_or_else(|| {
                LedgerError::validation(
                    "date",
                    format!("`{raw}` is neither YYYY-MM-DD nor a day of {}", period.label()),
                )
            })
    }
}

fn parse_kind(raw: &str) -> Result<EntryKind, LedgerError> {
    match raw.to_ascii_lowercase().as_str() {
        "credit" | "masuk" => Ok(EntryKind::Credit),
        "debit" | "keluar" => Ok(EntryKind::Debit),
        other => Err(LedgerError::validation(
            "kind",
            format!("`{other}` must be credit or debit"),
        )),
    }
}

fn parse_number(raw: &str, field: &'static str) -> Result<i64, LedgerError> {
    raw.parse::<i64>()
        .map_err(|_| LedgerError::validation(field, format!("`{raw}` is not a number")))
}

fn print_help() {
    output::info("commands:");
    println!("  period <month> <year>                 select the reporting period");
    println!("  opening <amount>                      set the opening balance");
    println!("  add <date> <credit|debit> <amount> <description…>");
    println!("  delete <index>                        remove a non-opening item");
    println!("  list | report                         print the report preview");
    println!("  totals                                print period totals");
    println!("  chair <name…> / treasurer <name…>     set signatory names");
    println!("  export [path]                         write the XLSX report");
    println!("  reset                                 drop all items but the opening one");
    println!("  exit                                  leave the shell");
}
