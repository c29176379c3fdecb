use crate::core::manager::PetManager;
use crate::core::{Action, ActivityLog, Dice, PetStore};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive command loop. End of input behaves like "Exit".
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<S: PetStore, L: ActivityLog, D: Dice>(
        &mut self,
        manager: &mut PetManager<S, L, D>,
    ) -> Result<()> {
        loop {
            writeln!(self.output, "\nVirtual Pet Care\n")?;
            writeln!(self.output, "1. Create pet")?;
            writeln!(self.output, "2. Select pet")?;
            writeln!(self.output, "3. Exit")?;

            let flow = match self.prompt("> ")?.as_deref() {
                None | Some("3") => Flow::Exit,
                Some("1") => self.create_pet(manager)?,
                Some("2") => self.select_pet(manager)?,
                Some(_) => Flow::Continue,
            };

            if flow == Flow::Exit {
                tracing::debug!("Leaving menu");
                return Ok(());
            }
        }
    }

    fn create_pet<S: PetStore, L: ActivityLog, D: Dice>(
        &mut self,
        manager: &mut PetManager<S, L, D>,
    ) -> Result<Flow> {
        loop {
            let Some(name) = self.prompt("Name: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(species) = self.prompt("Species: ")? else {
                return Ok(Flow::Exit);
            };

            match manager.add_pet(&name, &species) {
                Ok(_) => return Ok(Flow::Continue),
                Err(e) => writeln!(self.output, "{}", e.user_friendly_message())?,
            }
        }
    }

    fn select_pet<S: PetStore, L: ActivityLog, D: Dice>(
        &mut self,
        manager: &mut PetManager<S, L, D>,
    ) -> Result<Flow> {
        if manager.is_empty() {
            writeln!(self.output, "No pets yet! Create one first.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Choose a pet:")?;
        for (i, pet) in manager.pets().iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", i + 1, pet.name(), pet.species())?;
        }

        let Some(choice) = self.prompt("> ")? else {
            return Ok(Flow::Exit);
        };
        match choice.parse::<usize>() {
            Ok(number) if (1..=manager.len()).contains(&number) => {
                self.manage_pet(manager, number - 1)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn manage_pet<S: PetStore, L: ActivityLog, D: Dice>(
        &mut self,
        manager: &mut PetManager<S, L, D>,
        index: usize,
    ) -> Result<Flow> {
        loop {
            writeln!(self.output, "\n{}", manager.pet(index)?)?;
            writeln!(self.output, "\n1. Feed\n2. Play\n3. Sleep\n4. Back")?;

            let action = match self.prompt("> ")?.as_deref() {
                None => return Ok(Flow::Exit),
                Some("1") => Action::Feed,
                Some("2") => Action::Play,
                Some("3") => Action::Sleep,
                Some("4") => return Ok(Flow::Continue),
                Some(_) => continue,
            };

            manager.act(index, action)?;
        }
    }

    /// Trimmed line, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
