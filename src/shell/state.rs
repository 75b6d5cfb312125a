use crate::modules::appointments::adapters::outbound::seed::demo_appointments;
use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::use_cases::book_appointment::handler::BookAppointmentHandler;
use crate::modules::auth::core::session::SessionFlag;
use crate::modules::essays::adapters::outbound::seed::demo_essays;
use crate::modules::essays::core::essay::EssayRecord;
use crate::modules::essays::use_cases::register_essay::handler::RegisterEssayHandler;
use crate::modules::library::adapters::outbound::seed::{demo_materials, demo_weekly_themes};
use crate::modules::library::core::material::Material;
use crate::modules::library::core::weekly_theme::WeeklyTheme;
use crate::modules::library::use_cases::publish_material::handler::PublishMaterialHandler;
use crate::modules::library::use_cases::weekly_themes::handler::CreateWeeklyThemeHandler;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of the current calendar date.
pub type Today = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The process-wide stores, before they are shared.
#[derive(Default)]
pub struct InMemoryStores {
    pub essays: InMemoryRecordStore<EssayRecord>,
    pub appointments: InMemoryRecordStore<Appointment>,
    pub materials: InMemoryRecordStore<Material>,
    pub weekly_themes: InMemoryRecordStore<WeeklyTheme>,
}

impl InMemoryStores {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            essays: InMemoryRecordStore::seeded(demo_essays()),
            appointments: InMemoryRecordStore::seeded(demo_appointments()),
            materials: InMemoryRecordStore::seeded(demo_materials()),
            weekly_themes: InMemoryRecordStore::seeded(demo_weekly_themes()),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.essays.toggle_offline();
        self.appointments.toggle_offline();
        self.materials.toggle_offline();
        self.weekly_themes.toggle_offline();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub essays: Arc<dyn RecordStore<EssayRecord>>,
    pub register_essay: Arc<RegisterEssayHandler<InMemoryRecordStore<EssayRecord>>>,
    pub appointments: Arc<dyn RecordStore<Appointment>>,
    pub book_appointment: Arc<BookAppointmentHandler<InMemoryRecordStore<Appointment>>>,
    pub materials: Arc<dyn RecordStore<Material>>,
    pub publish_material: Arc<PublishMaterialHandler<InMemoryRecordStore<Material>>>,
    pub weekly_themes: Arc<dyn RecordStore<WeeklyTheme>>,
    pub create_weekly_theme: Arc<CreateWeeklyThemeHandler<InMemoryRecordStore<WeeklyTheme>>>,
    pub session: Arc<SessionFlag>,
    pub today: Today,
}

impl AppState {
    pub fn new(stores: InMemoryStores, today: Today) -> Self {
        let essays = Arc::new(stores.essays);
        let appointments = Arc::new(stores.appointments);
        let materials = Arc::new(stores.materials);
        let weekly_themes = Arc::new(stores.weekly_themes);
        Self {
            register_essay: Arc::new(RegisterEssayHandler::new(essays.clone())),
            essays,
            book_appointment: Arc::new(BookAppointmentHandler::new(appointments.clone())),
            appointments,
            publish_material: Arc::new(PublishMaterialHandler::new(materials.clone())),
            materials,
            create_weekly_theme: Arc::new(CreateWeeklyThemeHandler::new(weekly_themes.clone())),
            weekly_themes,
            session: Arc::new(SessionFlag::new()),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}
