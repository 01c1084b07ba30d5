//! Profile page: personal details and the farm form.
//!
//! The store allows any number of farms; this page treats the first farm
//! as the user's only one. Saving the farm form updates that farm when it
//! exists and creates it otherwise, so a session never ends up with two.

use agro_core::entities::{Farm, User};
use agro_core::enums::{FlashKind, SoilType};
use agro_core::responses::{FlashMessage, ProfileView};
use agro_store::repos::NewFarm;
use agro_store::updates::farm::FarmUpdateBuilder;
use agro_store::updates::user::UserUpdateBuilder;

use super::{Loader, PageController, StoreHandle};
use crate::catalog::COMMON_CROPS;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ProfileData {
    pub user: User,
    pub farm: Option<Farm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalForm {
    pub full_name: String,
    pub phone: String,
    pub bio: String,
}

impl PersonalForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }
}

/// Farm form as typed: numeric fields stay text until saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmForm {
    pub farm_name: String,
    pub location: String,
    pub state: String,
    pub farm_size_hectares: String,
    pub soil_type: Option<SoilType>,
    pub current_crops: Vec<String>,
    pub farming_experience_years: String,
    pub irrigation_available: bool,
}

impl FarmForm {
    #[must_use]
    pub fn from_farm(farm: &Farm) -> Self {
        Self {
            farm_name: farm.farm_name.clone(),
            location: farm.location.clone(),
            state: farm.state.clone(),
            farm_size_hectares: blank_if_zero_f64(farm.farm_size_hectares),
            soil_type: Some(farm.soil_type),
            current_crops: farm.current_crops.clone(),
            farming_experience_years: blank_if_zero_u32(farm.farming_experience_years),
            irrigation_available: farm.irrigation_available,
        }
    }

    /// Add a typed crop name. Blank names and duplicates are ignored.
    pub fn add_crop(&mut self, raw: &str) -> bool {
        let crop = raw.trim();
        if crop.is_empty() || self.current_crops.iter().any(|c| c == crop) {
            return false;
        }
        self.current_crops.push(crop.to_string());
        true
    }

    /// Add one of the suggested crops unless already listed.
    pub fn add_common_crop(&mut self, crop: &str) -> bool {
        if self.current_crops.iter().any(|c| c == crop) {
            return false;
        }
        self.current_crops.push(crop.to_string());
        true
    }

    pub fn remove_crop(&mut self, crop: &str) -> bool {
        let before = self.current_crops.len();
        self.current_crops.retain(|c| c != crop);
        self.current_crops.len() != before
    }

    /// Suggested crops not yet on the list.
    #[must_use]
    pub fn suggested_crops(&self) -> Vec<&'static str> {
        COMMON_CROPS
            .iter()
            .copied()
            .filter(|c| !self.current_crops.iter().any(|have| have == c))
            .collect()
    }

    /// Size as a number; anything unparseable or negative counts as 0.
    #[must_use]
    pub fn size_hectares(&self) -> f64 {
        parse_leading_float(&self.farm_size_hectares)
            .filter(|v| *v >= 0.0)
            .unwrap_or(0.0)
    }

    /// Whole years; anything unparseable or negative counts as 0.
    #[must_use]
    pub fn experience_years(&self) -> u32 {
        parse_leading_uint(&self.farming_experience_years).unwrap_or(0)
    }
}

fn blank_if_zero_f64(value: f64) -> String {
    if value.abs() < f64::EPSILON {
        String::new()
    } else {
        value.to_string()
    }
}

fn blank_if_zero_u32(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Longest numeric prefix of `raw`, so `"2.5 ha"` reads as 2.5.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    (1..=end)
        .rev()
        .filter(|&i| raw.is_char_boundary(i))
        .find_map(|i| raw[..i].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Leading decimal digits of `raw`, so `"7.5"` reads as 7.
fn parse_leading_uint(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct ProfileController {
    store: StoreHandle,
    loader: Loader<ProfileData>,
    personal: PersonalForm,
    farm_form: FarmForm,
    message: Option<FlashMessage>,
}

impl ProfileController {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            loader: Loader::default(),
            personal: PersonalForm::default(),
            farm_form: FarmForm::default(),
            message: None,
        }
    }

    #[must_use]
    pub const fn personal(&self) -> &PersonalForm {
        &self.personal
    }

    pub const fn personal_mut(&mut self) -> &mut PersonalForm {
        &mut self.personal
    }

    #[must_use]
    pub const fn farm_form(&self) -> &FarmForm {
        &self.farm_form
    }

    pub const fn farm_form_mut(&mut self) -> &mut FarmForm {
        &mut self.farm_form
    }

    #[must_use]
    pub const fn message(&self) -> Option<&FlashMessage> {
        self.message.as_ref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    fn flash(&mut self, kind: FlashKind, text: &str) {
        self.message = Some(FlashMessage {
            kind,
            text: text.to_string(),
        });
    }

    /// Save name, phone, and bio for the current user, then reload.
    /// Blank phone or bio clears the stored value.
    ///
    /// # Errors
    ///
    /// Returns the store error; the flash message says the save failed.
    pub async fn save_personal(&mut self) -> Result<User, AppError> {
        let update = UserUpdateBuilder::new()
            .full_name(self.personal.full_name.trim())
            .phone(non_blank(&self.personal.phone))
            .bio(non_blank(&self.personal.bio))
            .build();
        match self.store.update_current_user(update).await {
            Ok(user) => {
                self.flash(FlashKind::Success, "Personal information updated successfully!");
                self.load().await;
                Ok(user)
            }
            Err(e) => {
                tracing::error!(error = %e, "saving personal info failed");
                self.flash(FlashKind::Error, "Failed to save personal information");
                Err(e.into())
            }
        }
    }

    /// Save the farm form: update the active farm, or create it if the user
    /// has none yet. Then reload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when creating a farm without a soil
    /// type, or the store error when the record is rejected. Either way the
    /// flash message says the save failed.
    pub async fn save_farm(&mut self) -> Result<Farm, AppError> {
        let result = self.write_farm().await;
        match &result {
            Ok(farm) => {
                tracing::debug!(id = %farm.id, "farm profile saved");
                self.flash(FlashKind::Success, "Farm profile saved successfully!");
                self.load().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "saving farm profile failed");
                self.flash(FlashKind::Error, "Failed to save farm profile");
            }
        }
        result
    }

    async fn write_farm(&self) -> Result<Farm, AppError> {
        let form = &self.farm_form;
        if let Some(existing) = self.store.active_farm().await? {
            let mut update = FarmUpdateBuilder::new()
                .farm_name(form.farm_name.trim())
                .location(form.location.trim())
                .state(form.state.trim())
                .farm_size_hectares(form.size_hectares())
                .current_crops(form.current_crops.clone())
                .irrigation_available(form.irrigation_available)
                .farming_experience_years(form.experience_years());
            if let Some(soil) = form.soil_type {
                update = update.soil_type(soil);
            }
            return Ok(self.store.update(&existing.id, update.build()).await?);
        }

        let soil_type = form
            .soil_type
            .ok_or_else(|| AppError::validation("Soil type is required"))?;
        Ok(self
            .store
            .create(NewFarm {
                farm_name: form.farm_name.trim().to_string(),
                location: form.location.trim().to_string(),
                state: form.state.trim().to_string(),
                farm_size_hectares: form.size_hectares(),
                soil_type,
                current_crops: form.current_crops.clone(),
                irrigation_available: form.irrigation_available,
                farming_experience_years: form.experience_years(),
            })
            .await?)
    }

    #[must_use]
    pub fn view(&self) -> Option<ProfileView> {
        let data = self.loader.data()?;
        Some(ProfileView {
            user: data.user.clone(),
            farm: data.farm.clone(),
            message: self.message.clone(),
        })
    }
}

impl PageController for ProfileController {
    type Data = ProfileData;
    const PAGE: &'static str = "profile";

    fn loader(&self) -> &Loader<ProfileData> {
        &self.loader
    }

    fn loader_mut(&mut self) -> &mut Loader<ProfileData> {
        &mut self.loader
    }

    async fn fetch(&self) -> Result<ProfileData, AppError> {
        let (user, farm) = tokio::try_join!(self.store.current_user(), self.store.active_farm())?;
        Ok(ProfileData { user, farm })
    }

    fn on_ready(&mut self) {
        let Some(data) = self.loader.data() else {
            return;
        };
        let personal = PersonalForm::from_user(&data.user);
        let farm_form = data.farm.as_ref().map(FarmForm::from_farm).unwrap_or_default();
        self.personal = personal;
        self.farm_form = farm_form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bundled_store, store_with_users_only};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2.5", 2.5)]
    #[case(" 3 ha", 3.0)]
    #[case("abc", 0.0)]
    #[case("", 0.0)]
    #[case("1e1", 10.0)]
    #[case("-2", 0.0)]
    fn size_is_coerced(#[case] raw: &str, #[case] expected: f64) {
        let form = FarmForm {
            farm_size_hectares: raw.to_string(),
            ..FarmForm::default()
        };
        assert!((form.size_hectares() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("12", 12)]
    #[case("7.9", 7)]
    #[case("-3", 0)]
    #[case("ten", 0)]
    fn experience_is_coerced(#[case] raw: &str, #[case] expected: u32) {
        let form = FarmForm {
            farming_experience_years: raw.to_string(),
            ..FarmForm::default()
        };
        assert_eq!(form.experience_years(), expected);
    }

    #[test]
    fn crop_helpers_trim_and_dedupe() {
        let mut form = FarmForm::default();
        assert!(form.add_crop("  maize "));
        assert!(!form.add_crop("maize"));
        assert!(!form.add_crop("   "));
        assert!(form.add_common_crop("okra"));
        assert!(!form.add_common_crop("okra"));
        assert_eq!(form.current_crops, vec!["maize", "okra"]);
        assert!(!form.suggested_crops().contains(&"okra"));
        assert!(form.remove_crop("maize"));
        assert!(!form.remove_crop("maize"));
        assert_eq!(form.current_crops, vec!["okra"]);
    }

    #[tokio::test]
    async fn load_seeds_forms() {
        let mut profile = ProfileController::new(bundled_store());
        profile.load().await;
        assert_eq!(profile.personal().full_name, "Adebayo Ogunleye");
        assert_eq!(profile.farm_form().farm_name, "Green Valley Farm");
        assert_eq!(profile.farm_form().soil_type, Some(SoilType::Loam));
    }

    #[tokio::test]
    async fn save_farm_updates_existing_farm() {
        let store = bundled_store();
        let mut profile = ProfileController::new(store.clone());
        profile.load().await;
        profile.farm_form_mut().farm_size_hectares = "4.75".into();
        profile.farm_form_mut().add_crop("cassava");

        let saved = profile.save_farm().await.unwrap();
        assert_eq!(store.farms().len().await, 1);
        assert!((saved.farm_size_hectares - 4.75).abs() < f64::EPSILON);
        assert!(saved.current_crops.contains(&"cassava".to_string()));
        assert_eq!(profile.message().unwrap().kind, FlashKind::Success);
        assert_eq!(profile.view().unwrap().farm.unwrap(), saved);
    }

    #[tokio::test]
    async fn negative_numbers_are_coerced_on_save() {
        let mut profile = ProfileController::new(bundled_store());
        profile.load().await;
        profile.farm_form_mut().farm_size_hectares = "-2".into();
        profile.farm_form_mut().farming_experience_years = "-3".into();

        let saved = profile.save_farm().await.unwrap();
        assert!(saved.farm_size_hectares.abs() < f64::EPSILON);
        assert_eq!(saved.farming_experience_years, 0);
        assert_eq!(profile.message().unwrap().kind, FlashKind::Success);
    }

    #[tokio::test]
    async fn save_farm_creates_when_none_exists() {
        let store = store_with_users_only();
        let mut profile = ProfileController::new(store.clone());
        profile.load().await;
        assert!(profile.view().unwrap().farm.is_none());

        let form = profile.farm_form_mut();
        form.farm_name = "Riverside Plot".into();
        form.state = "Rivers".into();
        form.farm_size_hectares = "not a number".into();
        form.soil_type = Some(SoilType::Clay);

        let created = profile.save_farm().await.unwrap();
        assert!(created.farm_size_hectares.abs() < f64::EPSILON);
        assert_eq!(store.farms().len().await, 1);

        // A second save updates rather than creating another farm.
        profile.farm_form_mut().location = "Port Harcourt".into();
        profile.save_farm().await.unwrap();
        assert_eq!(store.farms().len().await, 1);
    }

    #[tokio::test]
    async fn creating_without_soil_type_fails_with_flash() {
        let store = store_with_users_only();
        let mut profile = ProfileController::new(store.clone());
        profile.load().await;
        let err = profile.save_farm().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(profile.message().unwrap().kind, FlashKind::Error);
        assert!(store.farms().is_empty().await);
    }

    #[tokio::test]
    async fn save_personal_clears_blank_fields() {
        let mut profile = ProfileController::new(bundled_store());
        profile.load().await;
        profile.personal_mut().full_name = " Adebayo O. ".into();
        profile.personal_mut().bio = "   ".into();
        let user = profile.save_personal().await.unwrap();
        assert_eq!(user.full_name, "Adebayo O.");
        assert!(user.bio.is_none());
        assert_eq!(
            profile.message().unwrap().text,
            "Personal information updated successfully!"
        );
        profile.clear_message();
        assert!(profile.view().unwrap().message.is_none());
    }
}
