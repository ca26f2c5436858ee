//! Form state store.
//!
//! Holds the in-progress `PortfolioData` for one customization session and
//! applies partial updates to it. No operation here can fail.

use crate::models::{
    ImageAsset, ImageSlot, PortfolioData, PortfolioPatch, ProjectDraft, SocialLinksPatch,
};

#[derive(Debug, Clone, Default)]
pub struct FormStore {
    data: PortfolioData,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    /// Copy of the aggregate for preview/export. Renderers never see the
    /// store itself.
    pub fn snapshot(&self) -> PortfolioData {
        self.data.clone()
    }

    pub fn reset(&mut self) {
        self.data = PortfolioData::default();
    }

    /// Shallow merge; `social_links` is merged one level deep.
    pub fn merge(&mut self, patch: PortfolioPatch) {
        let data = &mut self.data;

        replace(&mut data.name, patch.name);
        replace(&mut data.title, patch.title);
        replace(&mut data.bio, patch.bio);
        replace(&mut data.email, patch.email);
        replace(&mut data.phone, patch.phone);
        replace(&mut data.skills, patch.skills);
        replace(&mut data.experience, patch.experience);
        replace(&mut data.education, patch.education);
        replace(&mut data.projects, patch.projects);
        replace(&mut data.color_scheme, patch.color_scheme);
        replace(&mut data.font, patch.font);

        if let Some(SocialLinksPatch {
            linkedin,
            github,
            twitter,
        }) = patch.social_links
        {
            let links = &mut data.social_links;
            if linkedin.is_some() {
                links.linkedin = linkedin;
            }
            if github.is_some() {
                links.github = github;
            }
            if twitter.is_some() {
                links.twitter = twitter;
            }
        }
    }

    /// Append a project if its name and description are filled in.
    pub fn add_project(&mut self, draft: ProjectDraft) -> bool {
        match draft.into_project() {
            Some(project) => {
                self.data.projects.push(project);
                true
            }
            None => false,
        }
    }

    pub fn remove_project(&mut self, index: usize) -> bool {
        if index < self.data.projects.len() {
            self.data.projects.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_image(&mut self, slot: ImageSlot, asset: ImageAsset) {
        *self.image_mut(slot) = Some(asset);
    }

    pub fn clear_image(&mut self, slot: ImageSlot) {
        *self.image_mut(slot) = None;
    }

    fn image_mut(&mut self, slot: ImageSlot) -> &mut Option<ImageAsset> {
        match slot {
            ImageSlot::Profile => &mut self.data.profile_image,
            ImageSlot::Cover => &mut self.data.cover_image,
        }
    }
}

fn replace<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorScheme, Font};

    fn image(name: &str) -> ImageAsset {
        ImageAsset {
            content_type: "image/jpeg".to_string(),
            file_name: name.to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    #[test]
    fn test_merge_replaces_only_given_fields() {
        let mut store = FormStore::new();
        store.merge(PortfolioPatch {
            name: Some("Ada Lovelace".to_string()),
            title: Some("Analyst".to_string()),
            ..Default::default()
        });
        store.merge(PortfolioPatch {
            title: Some("Engineer".to_string()),
            ..Default::default()
        });

        assert_eq!(store.data().name, "Ada Lovelace");
        assert_eq!(store.data().title, "Engineer");
    }

    #[test]
    fn test_merge_social_links_is_one_level_deep() {
        let mut store = FormStore::new();
        store.merge(PortfolioPatch {
            social_links: Some(SocialLinksPatch {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let patch: PortfolioPatch =
            serde_json::from_str(r#"{"socialLinks":{"github":"g"}}"#).unwrap();
        store.merge(patch);

        let links = &store.data().social_links;
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
        assert_eq!(links.github.as_deref(), Some("g"));
        assert_eq!(links.twitter, None);
    }

    #[test]
    fn test_merge_appearance() {
        let mut store = FormStore::new();
        store.merge(PortfolioPatch {
            color_scheme: Some(ColorScheme::Dark),
            font: Some(Font::Mono),
            ..Default::default()
        });
        assert_eq!(store.data().color_scheme, ColorScheme::Dark);
        assert_eq!(store.data().font, Font::Mono);
    }

    #[test]
    fn test_add_project_with_empty_name_is_noop() {
        let mut store = FormStore::new();
        let added = store.add_project(ProjectDraft {
            name: String::new(),
            description: "Has a description".to_string(),
            ..Default::default()
        });
        assert!(!added);
        assert_eq!(store.data().projects.len(), 0);
    }

    #[test]
    fn test_add_project_keeps_insertion_order() {
        let mut store = FormStore::new();
        for name in ["first", "second", "first"] {
            assert!(store.add_project(ProjectDraft {
                name: name.to_string(),
                description: "d".to_string(),
                ..Default::default()
            }));
        }
        let names: Vec<_> = store.data().projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_remove_project_out_of_range() {
        let mut store = FormStore::new();
        assert!(!store.remove_project(0));
    }

    #[test]
    fn test_images_set_and_clear() {
        let mut store = FormStore::new();
        store.set_image(ImageSlot::Profile, image("me.jpg"));
        store.set_image(ImageSlot::Cover, image("cover.jpg"));
        store.clear_image(ImageSlot::Cover);

        assert_eq!(
            store.data().image(ImageSlot::Profile).map(|i| i.file_name.as_str()),
            Some("me.jpg")
        );
        assert!(store.data().image(ImageSlot::Cover).is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = FormStore::new();
        let before = store.snapshot();
        store.merge(PortfolioPatch {
            name: Some("Changed".to_string()),
            ..Default::default()
        });
        assert_eq!(before.name, "");
        store.reset();
        assert_eq!(store.data(), &PortfolioData::default());
    }
}
