/// What the user can type at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    More,
    /// 1-based row of the list.
    Open(usize),
    Back,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word.to_lowercase(),
            None => return Err("type `help` to list the commands".to_string()),
        };

        let parsed = match command.as_str() {
            "refresh" | "r" => Command::Refresh,
            "more" | "next" | "m" => Command::More,
            "open" | "o" => {
                let row = words
                    .next()
                    .ok_or_else(|| "`open` needs a row number".to_string())?;
                let row = row
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row > 0)
                    .ok_or_else(|| format!("`{row}` is not a row number"))?;
                Command::Open(row)
            }
            "back" | "b" => Command::Back,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("unknown command `{other}`")),
        };

        if words.next().is_some() {
            return Err(format!("too many arguments for `{command}`"));
        }
        Ok(parsed)
    }
}
