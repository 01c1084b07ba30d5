use agro_app::PageController;
use agro_app::catalog::COMMON_CROPS;
use agro_app::controllers::ProfileController;
use agro_app::controllers::profile::FarmForm;
use agro_core::enums::{SoilType, parse_enum};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ProfileCommands, SaveFarmArgs};
use crate::commands::shared::page::emit;
use crate::context::AppContext;

/// Handle `agro profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = ProfileController::new(ctx.store());
    page.load().await;

    match action {
        ProfileCommands::Show => {}
        ProfileCommands::SavePersonal {
            full_name,
            phone,
            bio,
        } => {
            let form = page.personal_mut();
            if let Some(full_name) = full_name {
                form.full_name.clone_from(full_name);
            }
            if let Some(phone) = phone {
                form.phone.clone_from(phone);
            }
            if let Some(bio) = bio {
                form.bio.clone_from(bio);
            }
            page.save_personal().await?;
        }
        ProfileCommands::SaveFarm(args) => {
            apply_farm_args(page.farm_form_mut(), args)?;
            page.save_farm().await?;
        }
    }
    emit(&page, page.view(), flags)
}

fn apply_farm_args(form: &mut FarmForm, args: &SaveFarmArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.farm_name {
        form.farm_name.clone_from(name);
    }
    if let Some(location) = &args.location {
        form.location.clone_from(location);
    }
    if let Some(state) = &args.state {
        form.state.clone_from(state);
    }
    if let Some(size) = &args.size {
        form.farm_size_hectares.clone_from(size);
    }
    if let Some(experience) = &args.experience {
        form.farming_experience_years.clone_from(experience);
    }
    if let Some(soil) = &args.soil_type {
        form.soil_type = Some(parse_enum::<SoilType>(soil, "soil_type")?);
    }
    if let Some(irrigation) = args.irrigation {
        form.irrigation_available = irrigation;
    }
    for crop in &args.remove_crops {
        form.remove_crop(crop);
    }
    for crop in &args.crops {
        form.add_crop(crop);
    }
    for crop in &args.common_crops {
        if !COMMON_CROPS.contains(&crop.as_str()) {
            anyhow::bail!("'{crop}' is not in the common crop list");
        }
        form.add_common_crop(crop);
    }
    Ok(())
}
