use crate::command::CommandHandle;
use crate::error::CommandError;
use crate::model::Tv;

// 두 stack 모두 마지막 원소가 top 이다.
#[derive(Default)]
pub struct UndoManager {
    undo_stack: Vec<CommandHandle>,
    redo_stack: Vec<CommandHandle>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Runs `command` and records it for undo.
    ///
    /// Redo history is discarded before the command runs, so it is gone even if
    /// `execute` fails. A failed command is not recorded.
    pub fn execute_cmd(&mut self, tv: &mut Tv, command: CommandHandle) -> Result<(), CommandError> {
        self.redo_stack.clear();
        let result = command.borrow_mut().execute(tv);
        if let Err(e) = result {
            log::warn!("execute failed for {:?}: {}", command.borrow(), e);
            return Err(e);
        }
        log::debug!("executed {:?}", command.borrow());
        self.undo_stack.push(command);
        Ok(())
    }

    pub fn undo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        let Some(command) = self.undo_stack.pop() else {
            log::trace!("undo: nothing to undo");
            return Ok(());
        };
        let result = command.borrow_mut().undo(tv);
        if let Err(e) = result {
            log::warn!("undo failed for {:?}: {}", command.borrow(), e);
            self.undo_stack.push(command);
            return Err(e);
        }
        log::debug!("undid {:?}", command.borrow());
        self.redo_stack.push(command);
        Ok(())
    }

    pub fn redo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        let Some(command) = self.redo_stack.pop() else {
            log::trace!("redo: nothing to redo");
            return Ok(());
        };
        let result = command.borrow_mut().redo(tv);
        if let Err(e) = result {
            log::warn!("redo failed for {:?}: {}", command.borrow(), e);
            self.redo_stack.push(command);
            return Err(e);
        }
        log::debug!("redid {:?}", command.borrow());
        self.undo_stack.push(command);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
