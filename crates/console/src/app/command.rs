/// A parsed console line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Session(String),
    End(Option<String>),
    Sessions,
    Visit(Visit),
    Back(Option<String>),
    Recent {
        limit: Option<usize>,
        skip: Option<String>,
        show_duplicates: bool,
    },
    Goto(String),
    Help,
    Quit,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visit {
    pub target: String,
    pub description: Option<String>,
    pub entity: Option<String>,
    pub stored_as: Option<String>,
    pub arguments: Vec<(String, String)>,
}

// Splits on whitespace, keeping "double quoted" runs together.
fn split_words(s: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_word = false;
    for ch in s.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut cur));
                    has_word = false;
                }
            }
            c => {
                cur.push(c);
                has_word = true;
            }
        }
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_word {
        words.push(cur);
    }
    Ok(words)
}

impl Command {
    pub fn parse(text: &str) -> Result<Self, String> {
        let words = split_words(text)?;
        let Some((cmd, args)) = words.split_first() else {
            return Err("empty command".to_string());
        };
        let arg = |i: usize| args.get(i).cloned();
        match cmd.to_lowercase().as_str() {
            "session" => arg(0)
                .map(Command::Session)
                .ok_or_else(|| "usage: session <name>".to_string()),
            "end" => Ok(Command::End(arg(0))),
            "sessions" => Ok(Command::Sessions),
            "visit" => parse_visit(args).map(Command::Visit),
            "back" => Ok(Command::Back(arg(0))),
            "recent" => {
                let mut limit = None;
                let mut skip = None;
                let mut show_duplicates = false;
                for a in args {
                    if a == "--dups" {
                        show_duplicates = true;
                    } else if let Ok(n) = a.parse::<usize>() {
                        limit = Some(n);
                    } else {
                        skip = Some(a.clone());
                    }
                }
                Ok(Command::Recent {
                    limit,
                    skip,
                    show_duplicates,
                })
            }
            "goto" => arg(0)
                .map(Command::Goto)
                .ok_or_else(|| "usage: goto <entry-id>".to_string()),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(crate::strings::unknown_command(other)),
        }
    }
}

fn parse_visit(args: &[String]) -> Result<Visit, String> {
    let Some((target, rest)) = args.split_first() else {
        return Err("usage: visit <[Pkg:]Controller->action> [key=value ...]".to_string());
    };
    let mut v = Visit {
        target: target.clone(),
        ..Visit::default()
    };
    for a in rest {
        let Some((k, val)) = a.split_once('=') else {
            return Err(format!("expected key=value, got '{}'", a));
        };
        match k {
            "desc" => v.description = Some(val.to_string()),
            "entity" => v.entity = Some(val.to_string()),
            "as" => v.stored_as = Some(val.to_string()),
            _ => v.arguments.push((k.to_string(), val.to_string())),
        }
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_words(r#"visit Product->edit desc="Edited product" page=2"#).unwrap(),
            ["visit", "Product->edit", "desc=Edited product", "page=2"]
        );
        assert!(split_words(r#"visit "open"#).is_err());
        assert_eq!(split_words(r#"goto """#).unwrap(), ["goto", ""]);
    }

    #[test]
    fn parses_visit() {
        let cmd = Command::parse(
            r#"visit Acme.Shop:Product->update desc="Updated product" entity=p1 as=Product->edit product=@p1"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::Visit(Visit {
                target: "Acme.Shop:Product->update".into(),
                description: Some("Updated product".into()),
                entity: Some("p1".into()),
                stored_as: Some("Product->edit".into()),
                arguments: vec![("product".into(), "@p1".into())],
            })
        );
    }

    #[test]
    fn parses_recent_options_in_any_order() {
        assert_eq!(
            Command::parse("recent --dups *->edit 5").unwrap(),
            Command::Recent {
                limit: Some(5),
                skip: Some("*->edit".into()),
                show_duplicates: true,
            }
        );
        assert_eq!(
            Command::parse("recent").unwrap(),
            Command::Recent {
                limit: None,
                skip: None,
                show_duplicates: false,
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("session").is_err());
        assert!(Command::parse("visit").is_err());
        assert!(Command::parse("visit Product->edit junk").is_err());
        assert!(Command::parse("fly away").is_err());
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("BACK").unwrap(), Command::Back(None));
        assert_eq!(Command::parse("end bob").unwrap(), Command::End(Some("bob".into())));
        assert_eq!(Command::parse("goto ID1").unwrap(), Command::Goto("ID1".into()));
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }
}
