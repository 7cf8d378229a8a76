//! Modal window handling for the application.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use shaun_logger as logger;
use shaun_modal::{Modal, ModalResult};

use super::App;
use crate::state::{ActiveModal, PendingAction};

/// Result of any modal, with the payload reduced to what the app consumes
enum ModalValue {
    /// Path typed into the Open / Save As prompt
    Path(String),
    /// Notice acknowledged
    Acknowledged,
}

fn path_result(result: ModalResult<String>) -> ModalResult<ModalValue> {
    match result {
        ModalResult::Confirmed(path) => ModalResult::Confirmed(ModalValue::Path(path)),
        ModalResult::Cancelled => ModalResult::Cancelled,
    }
}

fn notice_result(result: ModalResult<()>) -> ModalResult<ModalValue> {
    match result {
        ModalResult::Confirmed(()) => ModalResult::Confirmed(ModalValue::Acknowledged),
        ModalResult::Cancelled => ModalResult::Cancelled,
    }
}

impl App {
    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(modal) = self.state.active_modal.as_mut() else {
            return Ok(());
        };

        let result = match modal {
            ActiveModal::Input(m) => m.handle_key(key)?.map(path_result),
            ActiveModal::Info(m) => m.handle_key(key)?.map(notice_result),
        };

        if let Some(result) = result {
            self.finish_modal(result)?;
        }
        Ok(())
    }

    /// Handle mouse event in modal window
    pub(super) fn handle_modal_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let Some(modal) = self.state.active_modal.as_mut() else {
            return Ok(());
        };

        let result = match modal {
            ActiveModal::Input(m) => m.handle_mouse(mouse)?.map(path_result),
            ActiveModal::Info(m) => m.handle_mouse(mouse)?.map(notice_result),
        };

        if let Some(result) = result {
            self.finish_modal(result)?;
        }
        Ok(())
    }

    /// Close the modal and run the action it was opened for
    fn finish_modal(&mut self, result: ModalResult<ModalValue>) -> Result<()> {
        self.state.close_modal();
        let pending = self.state.take_pending_action();

        match (result, pending) {
            (ModalResult::Confirmed(ModalValue::Path(path)), Some(PendingAction::Open)) => {
                self.open_file(path.trim())?;
            }
            (ModalResult::Confirmed(ModalValue::Path(path)), Some(PendingAction::SaveAs)) => {
                self.save_file_as(path.trim());
            }
            (ModalResult::Cancelled, Some(action)) => {
                logger::debug(format!("{:?} dialog cancelled", action));
            }
            _ => {}
        }
        Ok(())
    }
}
