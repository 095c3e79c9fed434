use std::sync::Arc;

use command_use_case::port::WebinarRepository;
use query_use_case::port::WebinarReader;

#[derive(Clone)]
pub struct App {
    webinar_reader: Arc<dyn WebinarReader + Send + Sync>,
    webinar_repository: Arc<dyn WebinarRepository + Send + Sync>,
}

impl App {
    pub fn new(
        webinar_reader: Arc<dyn WebinarReader + Send + Sync>,
        webinar_repository: Arc<dyn WebinarRepository + Send + Sync>,
    ) -> Self {
        Self {
            webinar_reader,
            webinar_repository,
        }
    }
}

impl command_use_case::change_seats::ChangeSeats for App {}

impl command_use_case::change_seats::HasChangeSeats for App {
    fn change_seats(&self) -> Arc<dyn command_use_case::change_seats::ChangeSeats + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::organize_webinar::HasOrganizeWebinar for App {
    fn organize_webinar(
        &self,
    ) -> Arc<dyn command_use_case::organize_webinar::OrganizeWebinar + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl command_use_case::organize_webinar::OrganizeWebinar for App {}

impl command_use_case::port::HasWebinarRepository for App {
    fn webinar_repository(&self) -> Arc<dyn WebinarRepository + Send + Sync> {
        self.webinar_repository.clone()
    }
}

impl query_use_case::get_webinar::GetWebinar for App {}

impl query_use_case::get_webinar::HasGetWebinar for App {
    fn get_webinar(&self) -> Arc<dyn query_use_case::get_webinar::GetWebinar + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl query_use_case::port::HasWebinarReader for App {
    fn webinar_reader(&self) -> Arc<dyn WebinarReader + Send + Sync> {
        self.webinar_reader.clone()
    }
}
