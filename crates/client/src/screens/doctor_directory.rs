use std::collections::{BTreeMap, HashSet};

use clinica_core::errors::ClinicResult;
use clinica_core::models::{Doctor, EntityId};
use futures_util::future::try_join_all;
use tracing::{error, info};

use crate::api::ClinicApi;
use crate::screens::ListState;

pub const LOAD_FALLBACK_MESSAGE: &str = "Could not load doctors";

/// Doctors sharing the first letter of their name.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorSection {
    pub title: char,
    pub doctors: Vec<Doctor>,
}

/// Filters by name or specialty (case-insensitive) and groups the matches
/// into alphabetical sections. Listing order is kept inside a section.
pub fn group_and_filter(doctors: &[Doctor], search: &str) -> Vec<DoctorSection> {
    let needle = search.trim().to_lowercase();
    let mut grouped: BTreeMap<char, Vec<Doctor>> = BTreeMap::new();

    for doctor in doctors.iter().filter(|doctor| {
        doctor.nome.to_lowercase().contains(&needle)
            || doctor.especialidade.to_lowercase().contains(&needle)
    }) {
        let title = doctor
            .nome
            .trim()
            .chars()
            .next()
            .and_then(|first| first.to_uppercase().next())
            .unwrap_or('#');
        grouped.entry(title).or_default().push(doctor.clone());
    }

    grouped
        .into_iter()
        .map(|(title, doctors)| DoctorSection { title, doctors })
        .collect()
}

/// Searchable, sectioned list of doctors with expandable cards.
#[derive(Debug, Default)]
pub struct DoctorDirectory {
    state: ListState,
    doctors: Vec<Doctor>,
    search: String,
    expanded: HashSet<EntityId>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Lists doctors, then fetches every full record concurrently.
    /// Any failed fetch fails the whole load.
    pub async fn load<A>(&mut self, api: &A, page_size: u32) -> ClinicResult<()>
    where
        A: ClinicApi + ?Sized,
    {
        self.state = ListState::Loading;

        let result = match api.list_doctors(page_size).await {
            Ok(listing) => {
                try_join_all(listing.iter().map(|doctor| api.get_doctor(&doctor.id))).await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(doctors) => {
                info!("Loaded {} doctors", doctors.len());
                self.expanded.retain(|id| doctors.iter().any(|doctor| &doctor.id == id));
                self.doctors = doctors;
                self.state = ListState::Loaded;
                Ok(())
            }
            Err(err) => {
                error!("Failed to load doctors: {}", err);
                self.state = ListState::Failed(err.user_message(LOAD_FALLBACK_MESSAGE));
                Err(err)
            }
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn sections(&self) -> Vec<DoctorSection> {
        group_and_filter(&self.doctors, &self.search)
    }

    /// Flips a card open or closed; returns whether it is now expanded.
    pub fn toggle_expanded(&mut self, id: &EntityId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &EntityId) -> bool {
        self.expanded.contains(id)
    }
}
