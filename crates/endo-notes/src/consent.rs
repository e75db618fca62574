//! Informed-consent boilerplate.
//!
//! Medico-legal text: reproduced verbatim in every note where consent was
//! recorded. Any wording change must bump [`CONSENT_TEXT_VERSION`].

pub const CONSENT_TEXT_VERSION: u32 = 1;

pub const CONSENT_TEXT: &str = "\
Informed Consent: The diagnosis, the nature of the proposed treatment, and the reasonable alternatives, including no treatment and extraction, were explained to the patient. The patient was given the opportunity to ask questions and all questions were answered to the patient's satisfaction.

Risks discussed included, but were not limited to: post-operative pain, swelling, and infection; the possible need for additional appointments, retreatment, apical surgery, or extraction; separation of instruments within the canal; perforation of the root or crown; inability to locate, negotiate, or fully obturate calcified or curved canals; fracture of the tooth, crown, or existing restorations; temporary or permanent altered sensation of the lip, chin, tongue, or gums; and reactions to local anesthetic or medications.

Benefits discussed included relief of symptoms, resolution of infection, and retention of the natural tooth. The patient was informed that root canal treatment has a high but not guaranteed rate of success, and that a final restoration, typically a crown or onlay, must be placed promptly to protect the tooth from fracture and recontamination.

The patient verbally consented to the proposed treatment and signed the written consent form.";
