use crate::domain::catalog::{CatalogRepository, ModelDescriptor, VoiceDescriptor};
use crate::domain::tts::DeploymentProfile;
use std::sync::LazyLock;

fn voice(id: &str, name: &str, language: &str) -> VoiceDescriptor {
    VoiceDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        language: language.to_string(),
    }
}

fn model(id: &str, name: &str, quality: &str) -> ModelDescriptor {
    ModelDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        quality: quality.to_string(),
    }
}

static INTERNATIONAL_VOICES: LazyLock<Vec<VoiceDescriptor>> = LazyLock::new(|| {
    vec![
        voice("HK_Cantonese_female1", "Hong Kong Cantonese Female 1", "Cantonese"),
        voice("Cantonese_people_male_02", "Cantonese Male 02", "Cantonese"),
        voice("Chinese (Mandarin)_Reliable_Executive", "Reliable Executive", "Mandarin"),
        voice("Chinese (Mandarin)_News_Anchor", "News Anchor", "Mandarin"),
        voice("English_Trustworthy_Man", "Trustworthy Man", "English"),
        voice("English_Graceful_Lady", "Graceful Lady", "English"),
    ]
});

static MAINLAND_VOICES: LazyLock<Vec<VoiceDescriptor>> = LazyLock::new(|| {
    vec![
        voice("male-qn-qingse", "Youthful Male (Qingse)", "Mandarin"),
        voice("male-qn-jingying", "Elite Young Male", "Mandarin"),
        voice("male-qn-badao", "Domineering Young Male", "Mandarin"),
        voice("male-qn-daxuesheng", "College Student Male", "Mandarin"),
        voice("female-shaonv", "Young Girl", "Mandarin"),
        voice("female-yujie", "Mature Sister", "Mandarin"),
        voice("female-chengshu", "Mature Woman", "Mandarin"),
        voice("female-tianmei", "Sweet Woman", "Mandarin"),
        voice("presenter_male", "Male Presenter", "Mandarin"),
        voice("presenter_female", "Female Presenter", "Mandarin"),
    ]
});

static MODELS: LazyLock<Vec<ModelDescriptor>> = LazyLock::new(|| {
    vec![
        model("speech-02-hd", "Speech 02 HD", "high"),
        model("speech-02-turbo", "Speech 02 Turbo", "fast"),
        model("speech-01-hd", "Speech 01 HD", "high"),
        model("speech-01-turbo", "Speech 01 Turbo", "fast"),
    ]
});

/// Compiled-in catalog; the voice list depends on the deployment profile
pub struct HardcodedCatalogRepository {
    profile: DeploymentProfile,
}

impl HardcodedCatalogRepository {
    pub fn new(profile: DeploymentProfile) -> Self {
        Self { profile }
    }
}

impl CatalogRepository for HardcodedCatalogRepository {
    fn get_all_voices(&self) -> Vec<VoiceDescriptor> {
        match self.profile {
            DeploymentProfile::International => INTERNATIONAL_VOICES.clone(),
            DeploymentProfile::Mainland => MAINLAND_VOICES.clone(),
        }
    }

    fn get_all_models(&self) -> Vec<ModelDescriptor> {
        MODELS.clone()
    }
}
