// ============================================================================
// APP STATE - Estado de UI que sobrevive a los re-renders completos
// ============================================================================
// Los formularios viven aquí y no en la vista: cada render reconstruye el DOM
// desde cero y lo escrito no se pierde.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::academic::{CourseDraft, DepartmentDraft, ProgramDraft, UserDraft};
use crate::viewmodels::auth_viewmodel::LoginForm;
use crate::viewmodels::setup_viewmodel::SetupWizard;

/// Valor editable + error inline + bandera de envío en curso
pub struct FormState<T> {
    value: Rc<RefCell<T>>,
    error: Rc<RefCell<Option<String>>>,
    busy: Rc<Cell<bool>>,
}

impl<T> FormState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            error: Rc::new(RefCell::new(None)),
            busy: Rc::new(Cell::new(false)),
        }
    }

    pub fn edit(&self, editor: impl FnOnce(&mut T)) {
        editor(&mut *self.value.borrow_mut());
    }

    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Marca el envío como iniciado. `false` si ya había uno en curso.
    pub fn begin(&self) -> bool {
        if self.busy.replace(true) {
            return false;
        }
        *self.error.borrow_mut() = None;
        true
    }

    /// Cierra el envío; en error guarda el mensaje para mostrarlo inline
    pub fn finish<E: Into<String>>(&self, result: Result<(), E>) {
        self.busy.set(false);
        *self.error.borrow_mut() = result.err().map(Into::into);
    }

    pub fn reset(&self, value: T) {
        *self.value.borrow_mut() = value;
        *self.error.borrow_mut() = None;
        self.busy.set(false);
    }
}

impl<T: Clone> FormState<T> {
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for FormState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for FormState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            error: self.error.clone(),
            busy: self.busy.clone(),
        }
    }
}

/// Estado global de UI
#[derive(Clone, Default)]
pub struct AppState {
    pub login: FormState<LoginForm>,
    pub setup: FormState<SetupWizard>,
    pub department: FormState<DepartmentDraft>,
    pub program: FormState<ProgramDraft>,
    pub course: FormState<CourseDraft>,
    pub user: FormState<UserDraft>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Al cerrar sesión no deben quedar datos escritos por el usuario anterior
    pub fn clear_forms(&self) {
        self.login.reset(LoginForm::default());
        self.department.reset(DepartmentDraft::default());
        self.program.reset(ProgramDraft::default());
        self.course.reset(CourseDraft::default());
        self.user.reset(UserDraft::default());
    }
}
