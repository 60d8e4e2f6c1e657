use crate::api::ConcertsApi;
use crate::models::{Concert, NewConcert};
use crate::observable::Observable;
use crate::router::{Route, Router};
use crate::session::SessionStore;
use std::sync::Arc;

pub const LOAD_FAILED: &str = "Failed to load";
pub const ADD_FAILED: &str = "Failed to add";
pub const DELETE_FAILED: &str = "Failed to delete";
pub const EMPTY_MESSAGE: &str = "No concerts yet. Add your first one.";

#[derive(Debug, Clone, Default)]
pub struct ConcertForm {
    pub title: String,
    pub date: String,
    pub location: String,
}

impl ConcertForm {
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.date, &self.location]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    fn to_request(&self) -> NewConcert {
        NewConcert {
            title: self.title.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
        }
    }
}

/// The signed-in user's concerts.
pub struct ConcertsView {
    api: Arc<dyn ConcertsApi>,
    session: Arc<SessionStore>,
    router: Arc<Router>,
    pub form: ConcertForm,
    concerts: Observable<Vec<Concert>>,
    error: Observable<Option<String>>,
}

impl ConcertsView {
    pub fn new(api: Arc<dyn ConcertsApi>, session: Arc<SessionStore>, router: Arc<Router>) -> Self {
        Self {
            api,
            session,
            router,
            form: ConcertForm::default(),
            concerts: Observable::new(Vec::new()),
            error: Observable::new(None),
        }
    }

    pub fn concerts(&self) -> Vec<Concert> {
        self.concerts.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn concerts_state(&self) -> &Observable<Vec<Concert>> {
        &self.concerts
    }

    pub fn error_state(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Only signed-in users get the add form.
    pub fn can_add(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.concerts.with(|list| list.is_empty()) {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }

    /// Enter the view: without a session the user is sent to the login page
    /// and nothing is fetched. Returns whether the view stayed open.
    pub async fn open(&self) -> bool {
        if !self.session.is_authenticated() {
            self.router.navigate(Route::Login);
            return false;
        }
        self.load().await;
        true
    }

    pub async fn load(&self) {
        match self.api.list().await {
            Ok(list) => self.concerts.set(list),
            Err(e) => self.error.set(Some(e.user_message(LOAD_FAILED))),
        }
    }

    /// Submit the add form. A form with a blank required field issues no
    /// request.
    pub async fn add(&mut self) -> bool {
        if !self.form.is_complete() {
            return false;
        }

        match self.api.add(&self.form.to_request()).await {
            Ok(concert) => {
                self.concerts.update(|list| list.insert(0, concert));
                self.form = ConcertForm::default();
                self.load().await;
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(ADD_FAILED)));
                false
            }
        }
    }

    /// Delete a concert and drop it from the list without reloading. A
    /// failed delete leaves the list as it was.
    pub async fn remove(&self, id: i64) -> bool {
        match self.api.remove(id).await {
            Ok(_) => {
                self.concerts.update(|list| list.retain(|c| c.id != id));
                true
            }
            Err(e) => {
                self.error.set(Some(e.user_message(DELETE_FAILED)));
                false
            }
        }
    }

    pub fn edit_setlist(&self, id: i64) {
        self.router.navigate(Route::Setlist(id));
    }
}
