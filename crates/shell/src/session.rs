//! Interactive operator session: menu loop over a depot.

use std::io::{BufRead, Write};

use anyhow::Context;
use stockroom_inventory::{Depot, InventoryResult, Notice, NoticeSink, parse_pairs};

use crate::sink::{LineSink, OutputFormat};

const MENU: &str = "1.Receive 2.Parcel 3.Alerts 0.Quit";

/// Units received before the first prompt unless `--no-demo` is given.
pub const DEMO_SEED: [(char, i64); 4] = [('A', 1), ('B', 2), ('C', 10), ('A', 3)];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Choice {
    Quit,
    Receive,
    Parcel,
    Alerts,
}

impl Choice {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "0" => Some(Self::Quit),
            "1" => Some(Self::Receive),
            "2" => Some(Self::Parcel),
            "3" => Some(Self::Alerts),
            _ => None,
        }
    }
}

pub struct Session<R, W> {
    depot: Depot,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(depot: Depot, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            depot,
            input,
            output,
            format,
        }
    }

    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    /// Receive the demo units silently.
    pub fn seed_demo(&mut self) -> anyhow::Result<()> {
        self.depot
            .bulk_receive(DEMO_SEED, &mut Vec::<Notice>::new())
            .context("seeding demo stock")?;
        Ok(())
    }

    /// Run until the operator quits or input ends.
    ///
    /// An inventory error (allocation failure) ends the session with an error;
    /// the depot can no longer be trusted after it.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "=== STOCKROOM ===")?;
        loop {
            write!(self.output, "\n{MENU}\nChoice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match Choice::parse(&line) {
                Some(Choice::Quit) => break,
                Some(Choice::Alerts) => self.print_alerts()?,
                Some(choice) => {
                    write!(self.output, "Input (e.g. A1, B2): ")?;
                    self.output.flush()?;
                    let Some(items) = self.read_line()? else {
                        break;
                    };
                    let pairs = parse_pairs(&items);
                    if choice == Choice::Receive {
                        self.with_sink(|depot, sink| depot.bulk_receive(pairs, sink).map(|_| ()))?;
                    } else {
                        self.with_sink(|depot, sink| depot.bulk_dispatch(pairs, sink).map(|_| ()))?;
                    }
                }
                None => writeln!(self.output, "Unknown choice {:?}; pick 0-3.", line.trim())?,
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading operator input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn with_sink(
        &mut self,
        op: impl FnOnce(&mut Depot, &mut dyn NoticeSink) -> InventoryResult<()>,
    ) -> anyhow::Result<()> {
        let mut sink = LineSink::new(&mut self.output, self.format);
        let result = op(&mut self.depot, &mut sink);
        sink.finish()?;
        if let Err(err) = result {
            tracing::error!(%err, "inventory integrity lost; stopping");
            return Err(err).context("fatal inventory error");
        }
        Ok(())
    }

    fn print_alerts(&mut self) -> anyhow::Result<()> {
        let alerts = self.depot.alerts().render();
        match self.format {
            OutputFormat::Text => {
                writeln!(self.output, "\n--- ALERT LOG ---")?;
                for text in &alerts {
                    writeln!(self.output, "[Alert] Out of stock: {text}")?;
                }
                writeln!(self.output, "-----------------")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, &serde_json::json!({ "alerts": alerts }))?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }
}
