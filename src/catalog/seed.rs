//! Built-in Digital Labs catalog.

use crate::models::{Modality, ModelRecord, Status};

/// Returns the six built-in diagnostic models, all disabled.
#[must_use]
pub fn seed_records() -> Vec<ModelRecord> {
    vec![
        ModelRecord::new(
            "1",
            "Brain Tumor Detection",
            "MRI-based classifier for glioma, meningioma, pituitary and healthy controls.",
            "v1.4",
            Status::Stable,
            Modality::Imaging,
        )
        .with_tags(["MRI", "Neuro", "Classification"])
        .with_artwork("brain"),
        ModelRecord::new(
            "2",
            "Mammography – Lesion Detection",
            "Detects and prioritizes suspicious calcifications and masses in screening mammo.",
            "v0.9",
            Status::Beta,
            Modality::Imaging,
        )
        .with_tags(["X-ray", "Oncology", "Detection"])
        .with_artwork("mammo"),
        ModelRecord::new(
            "3",
            "Chest X-ray – Pneumonia/TB",
            "Binary/triage model to flag likely pneumonia or TB findings in CXR studies.",
            "v1.2",
            Status::Stable,
            Modality::Imaging,
        )
        .with_tags(["X-ray", "Pulmonary", "Triage"])
        .with_artwork("chest"),
        ModelRecord::new(
            "4",
            "ECG Arrhythmia Analysis",
            "Real-time detection and classification of cardiac arrhythmias from ECG signals.",
            "v0.8",
            Status::Beta,
            Modality::Signal,
        )
        .with_tags(["ECG", "Cardiology", "Classification"])
        .with_artwork("ecg"),
        ModelRecord::new(
            "5",
            "Skin Lesion Classification",
            "Dermoscopic image analysis for melanoma and other skin cancer detection.",
            "v1.1",
            Status::Stable,
            Modality::Imaging,
        )
        .with_tags(["Dermoscopy", "Oncology", "Classification"])
        .with_artwork("skin"),
        ModelRecord::new(
            "6",
            "Retinal Disease Screening",
            "Automated detection of diabetic retinopathy and other retinal pathologies.",
            "v0.7",
            Status::Research,
            Modality::Imaging,
        )
        .with_tags(["Fundus", "Ophthalmology", "Detection"])
        .with_artwork("retinal"),
    ]
}
