use directory::cache::CachedDirectory;
use repositories::client::ClientRepository;
use std::{
    io::{BufRead, Write},
    str::FromStr,
};
use types::{
    client::{parse_client_id, parse_first_name, parse_membership_number, Client, ClientId},
    error::Error,
};

const MENU: &str = "\
1. List clients
2. Add client
3. Find client by id
4. Modify client
5. Delete client
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    List,
    Add,
    Find,
    Modify,
    Delete,
    Exit,
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(MenuOption::List),
            "2" => Ok(MenuOption::Add),
            "3" => Ok(MenuOption::Find),
            "4" => Ok(MenuOption::Modify),
            "5" => Ok(MenuOption::Delete),
            "6" => Ok(MenuOption::Exit),
            _ => Err(()),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive text menu over the client directory. One command runs to completion
/// before the next one is read.
pub struct Console<R, I, O> {
    directory: CachedDirectory<R>,
    input: I,
    output: O,
}

impl<R, I, O> Console<R, I, O>
where
    R: ClientRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(directory: CachedDirectory<R>, input: I, output: O) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Runs until the user exits or the input is exhausted.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "*** Zona Fit ***")?;
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match line.parse::<MenuOption>() {
                Ok(option) => {
                    tracing::debug!("Menu option selected: {:?}", option);
                    self.execute(option).await?
                }
                Err(_) => {
                    writeln!(self.output, "Invalid option")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.output, "Goodbye")?;
        Ok(())
    }

    async fn execute(&mut self, option: MenuOption) -> anyhow::Result<Flow> {
        let result = match option {
            MenuOption::List => self.list_clients().await,
            MenuOption::Add => self.add_client().await,
            MenuOption::Find => self.find_client().await,
            MenuOption::Modify => self.modify_client().await,
            MenuOption::Delete => self.delete_client().await,
            MenuOption::Exit => return Ok(Flow::Exit),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(CommandError::Directory(err)) => {
                if let Error::Storage(ref source) = err {
                    tracing::error!("Storage failure: {:?}", source);
                }
                writeln!(self.output, "Operation failed: {}", err)?;
                Ok(Flow::Continue)
            }
            Err(CommandError::Io(err)) => Err(err.into()),
        }
    }

    async fn list_clients(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.output, "\n--- Clients ---")?;
        let clients = self.directory.list().await?;
        if clients.is_empty() {
            writeln!(self.output, "No clients registered")?;
        }
        for client in clients {
            writeln!(self.output, "{}", client)?;
        }
        Ok(Flow::Continue)
    }

    async fn add_client(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.output, "\n--- Add client ---")?;
        let Some(client) = self.read_client(None)? else {
            return Ok(Flow::Exit);
        };
        let stored = self.directory.upsert(client).await?;
        writeln!(self.output, "Client added: {}", stored)?;
        Ok(Flow::Continue)
    }

    async fn find_client(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.output, "\n--- Find client ---")?;
        let Some(client_id) = self.read_client_id()? else {
            return Ok(Flow::Exit);
        };
        match self.directory.find_by_id(client_id).await? {
            Some(client) => writeln!(self.output, "Client found: {}", client)?,
            None => writeln!(self.output, "Client {} not found", client_id)?,
        }
        Ok(Flow::Continue)
    }

    async fn modify_client(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.output, "\n--- Modify client ---")?;
        let Some(client_id) = self.read_client_id()? else {
            return Ok(Flow::Exit);
        };
        if self.directory.find_by_id(client_id).await?.is_none() {
            writeln!(self.output, "Client {} not found", client_id)?;
            return Ok(Flow::Continue);
        }

        let Some(client) = self.read_client(Some(client_id))? else {
            return Ok(Flow::Exit);
        };
        let stored = self.directory.upsert(client).await?;
        writeln!(self.output, "Client modified: {}", stored)?;
        Ok(Flow::Continue)
    }

    async fn delete_client(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.output, "\n--- Delete client ---")?;
        let Some(client_id) = self.read_client_id()? else {
            return Ok(Flow::Exit);
        };
        let Some(client) = self.directory.find_by_id(client_id).await? else {
            writeln!(self.output, "Client {} not found", client_id)?;
            return Ok(Flow::Continue);
        };

        self.directory.delete_by_id(client_id).await?;
        writeln!(self.output, "Client deleted: {}", client)?;
        Ok(Flow::Continue)
    }

    /// Gathers the data fields of a client, asking again until each one is usable.
    /// `None` once the input is exhausted.
    fn read_client(&mut self, id: Option<ClientId>) -> std::io::Result<Option<Client>> {
        let Some(first_name) = self.read_valid("First name: ", parse_first_name)? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("Last name: ")? else {
            return Ok(None);
        };
        let Some(membership_number) =
            self.read_valid("Membership number: ", parse_membership_number)?
        else {
            return Ok(None);
        };

        let client = Client {
            id,
            first_name,
            last_name: last_name.trim().to_owned(),
            membership_number,
        };
        Ok(Some(client))
    }

    fn read_client_id(&mut self) -> std::io::Result<Option<ClientId>> {
        self.read_valid("Client id: ", parse_client_id)
    }

    fn read_valid<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, Error>,
    ) -> std::io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        loop {
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned())),
                Err(_) => {
                    tracing::debug!("Discarded input line that is not valid UTF-8");
                    write!(self.output, "Input is not valid text\n{}", label)?;
                    self.output.flush()?;
                }
            }
        }
    }
}

enum CommandError {
    Directory(Error),
    Io(std::io::Error),
}

impl From<Error> for CommandError {
    fn from(err: Error) -> Self {
        CommandError::Directory(err)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}
