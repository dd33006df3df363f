use log::trace;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Line sink shared by appliances and the no-op command.
///
/// A stdout console prints, a recording console keeps the lines so the
/// side effects of a command can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct Console {
    transcript: Option<Rc<RefCell<Vec<String>>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self::default()
    }

    pub fn recording() -> Self {
        Self {
            transcript: Some(Rc::default()),
        }
    }

    pub fn print<S: Into<String>>(&self, line: S) -> std::io::Result<()> {
        let line = line.into();
        trace!("console: {:?}", line);

        match &self.transcript {
            Some(transcript) => {
                transcript.borrow_mut().push(line);
                Ok(())
            }
            None => writeln!(std::io::stdout().lock(), "{}", line),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.transcript
            .as_ref()
            .map_or_else(Vec::new, |transcript| transcript.borrow().clone())
    }
}
