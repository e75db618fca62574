use super::{ClinicalOption, opt};

// Subjective

pub const MEDICAL_ALERTS: &[ClinicalOption] = &[
    opt("none", "None"),
    opt("hypertension", "Hypertension"),
    opt("diabetes", "Diabetes"),
    opt("cardiac_condition", "Cardiac Condition"),
    opt("anticoagulants", "Anticoagulant Therapy"),
    opt("bisphosphonates", "Bisphosphonate Therapy"),
    opt("penicillin_allergy", "Penicillin Allergy"),
    opt("latex_allergy", "Latex Allergy"),
    opt("nsaid_allergy", "NSAID Allergy"),
    opt("pregnancy", "Pregnancy"),
    opt("prosthetic_joint", "Prosthetic Joint"),
    opt("immunocompromised", "Immunocompromised"),
];

pub const CHIEF_COMPLAINTS: &[ClinicalOption] = &[
    opt("pain", "Pain"),
    opt("swelling", "Swelling"),
    opt("cold_sensitivity", "Sensitivity to Cold"),
    opt("heat_sensitivity", "Sensitivity to Heat"),
    opt("biting_pain", "Pain on Biting"),
    opt("broken_tooth", "Broken Tooth"),
    opt("discoloration", "Tooth Discoloration"),
    opt("referred_for_evaluation", "Referral for Endodontic Evaluation"),
    opt("other", "Other"),
];

/// Chief-complaint value replaced by the free-text field.
pub const OTHER_COMPLAINT: &str = "other";

pub const PAIN_CHARACTERISTICS: &[ClinicalOption] = &[
    opt("sharp", "Sharp"),
    opt("dull", "Dull"),
    opt("throbbing", "Throbbing"),
    opt("spontaneous", "Spontaneous"),
    opt("lingering", "Lingering"),
    opt("intermittent", "Intermittent"),
    opt("constant", "Constant"),
    opt("radiating", "Radiating"),
    opt("localized", "Localized"),
];

pub const PAIN_DURATIONS: &[ClinicalOption] = &[
    opt("na", "N/A"),
    opt("days", "a few days"),
    opt("1_week", "1 week"),
    opt("2_weeks", "2 weeks"),
    opt("1_month", "1 month"),
    opt("several_months", "several months"),
    opt("over_6_months", "over 6 months"),
];

// Objective

pub const THERMAL_TESTS: &[ClinicalOption] = &[
    opt("normal", "Normal"),
    opt("no_response", "No Response"),
    opt("lingering", "Lingering"),
    opt("exaggerated", "Exaggerated"),
    opt("delayed", "Delayed"),
    opt("not_tested", "Not Tested"),
];

pub const EPT_RESULTS: &[ClinicalOption] = &[
    opt("responsive", "Responsive"),
    opt("no_response", "No Response"),
    opt("not_tested", "Not Tested"),
];

pub const PERCUSSION_PALPATION: &[ClinicalOption] = &[
    opt("wnl", "WNL"),
    opt("tender", "Tender"),
    opt("very_tender", "Very Tender"),
    opt("not_tested", "Not Tested"),
];

pub const PROBING: &[ClinicalOption] = &[
    opt("wnl", "WNL"),
    opt("isolated_deep", "Isolated Deep Pocket"),
    opt("generalized_deep", "Generalized Deep Pockets"),
    opt("not_tested", "Not Tested"),
];

pub const MOBILITY: &[ClinicalOption] = &[
    opt("wnl", "WNL"),
    opt("class_1", "Class I"),
    opt("class_2", "Class II"),
    opt("class_3", "Class III"),
];

pub const SWELLING: &[ClinicalOption] = &[
    opt("none", "None"),
    opt("localized_intraoral", "Localized Intraoral"),
    opt("diffuse_intraoral", "Diffuse Intraoral"),
    opt("extraoral", "Extraoral"),
    opt("fluctuant", "Fluctuant"),
];

pub const RADIOGRAPHIC_FINDINGS: &[ClinicalOption] = &[
    opt("wnl", "WNL"),
    opt("pdl_widening", "PDL Widening"),
    opt("periapical_radiolucency", "Periapical Radiolucency"),
    opt("condensing_osteitis", "Condensing Osteitis"),
    opt("internal_resorption", "Internal Resorption"),
    opt("external_resorption", "External Resorption"),
    opt("previous_rct", "Previous Root Canal Treatment"),
    opt("calcified_canals", "Calcified Canals"),
    opt("deep_caries", "Deep Caries"),
    opt("suspected_fracture", "Suspected Fracture"),
];

// Assessment

pub const PULPAL_DIAGNOSES: &[ClinicalOption] = &[
    opt("normal_pulp", "Normal Pulp"),
    opt("reversible_pulpitis", "Reversible Pulpitis"),
    opt("symptomatic_irreversible_pulpitis", "Symptomatic Irreversible Pulpitis"),
    opt("asymptomatic_irreversible_pulpitis", "Asymptomatic Irreversible Pulpitis"),
    opt("pulp_necrosis", "Pulp Necrosis"),
    opt("previously_treated", "Previously Treated"),
    opt("previously_initiated", "Previously Initiated Therapy"),
];

pub const PERIAPICAL_DIAGNOSES: &[ClinicalOption] = &[
    opt("normal_apical", "Normal Apical Tissues"),
    opt("symptomatic_ap", "Symptomatic Apical Periodontitis"),
    opt("asymptomatic_ap", "Asymptomatic Apical Periodontitis"),
    opt("acute_abscess", "Acute Apical Abscess"),
    opt("chronic_abscess", "Chronic Apical Abscess"),
    opt("condensing_osteitis", "Condensing Osteitis"),
];

pub const PROGNOSES: &[ClinicalOption] = &[
    opt("favorable", "Favorable"),
    opt("questionable", "Questionable"),
    opt("unfavorable", "Unfavorable"),
    opt("hopeless", "Hopeless"),
];

pub const TREATMENTS: &[ClinicalOption] = &[
    opt("initial_rct", "Non-Surgical Root Canal Therapy"),
    opt("retreatment", "Non-Surgical Retreatment"),
    opt("pulpotomy", "Pulpotomy"),
    opt("incision_drainage", "Incision and Drainage"),
    opt("apical_microsurgery", "Apical Microsurgery"),
    opt("hemisection", "Hemisection"),
    opt("root_resection", "Root Resection"),
    opt("apexification", "Apexification"),
    opt("apexogenesis", "Apexogenesis"),
    opt("regenerative_endo", "Regenerative Endodontics"),
    opt("intentional_replantation", "Intentional Replantation"),
    opt("autotransplantation", "Autotransplantation"),
    opt("extraction", "Extraction"),
    opt("no_treatment_monitoring", "No Treatment / Monitor"),
];

/// Treatment values that mean nothing was (or will be) done to the tooth.
pub const NO_TREATMENT_VALUES: &[&str] = &["no_treatment_monitoring"];

pub const TREATMENT_OUTCOMES: &[ClinicalOption] = &[
    opt("completed", "Completed (Obturated)"),
    opt("cleaned_shaped", "Cleaned and Shaped, Medicament Placed"),
    opt("pulp_extirpation", "Pulp Extirpation"),
    opt("discontinued", "Discontinued"),
];

/// Outcome that leaves canals unshaped and unfilled.
pub const PULP_EXTIRPATION: &str = "pulp_extirpation";

// Plan

pub const ANESTHETICS: &[ClinicalOption] = &[
    opt("lidocaine_2_100k", "Lidocaine 2% 1:100,000 epi"),
    opt("articaine_4_100k", "Articaine 4% 1:100,000 epi"),
    opt("articaine_4_200k", "Articaine 4% 1:200,000 epi"),
    opt("mepivacaine_3", "Mepivacaine 3% plain"),
    opt("prilocaine_4", "Prilocaine 4% plain"),
    opt("bupivacaine_05", "Bupivacaine 0.5% 1:200,000 epi"),
];

pub const ANESTHESIA_LOCATIONS: &[ClinicalOption] = &[
    opt("ian_block", "IANB"),
    opt("gow_gates", "Gow-Gates"),
    opt("akinosi", "Vazirani-Akinosi"),
    opt("long_buccal", "Long Buccal"),
    opt("mental", "Mental"),
    opt("psa", "PSA"),
    opt("infraorbital", "Infraorbital"),
    opt("greater_palatine", "Greater Palatine"),
    opt("buccal_infiltration", "Buccal Infiltration"),
    opt("palatal_infiltration", "Palatal Infiltration"),
    opt("lingual_infiltration", "Lingual Infiltration"),
    opt("pdl", "PDL"),
    opt("intraosseous", "Intraosseous"),
    opt("intrapulpal", "Intrapulpal"),
];

pub const ANESTHESIA_SIDES: &[ClinicalOption] = &[
    opt("rhs", "RHS"),
    opt("lhs", "LHS"),
    opt("bilateral", "Bilateral"),
];

pub const ISOLATION: &[ClinicalOption] = &[
    opt("rubber_dam", "Rubber Dam"),
    opt("split_dam", "Split Dam"),
    opt("isolite", "Isolite"),
    opt("cotton_rolls", "Cotton Rolls"),
];

pub const CANAL_CONFIGURATIONS: &[ClinicalOption] = &[
    opt("single", "Single Canal"),
    opt("b_l", "B, L"),
    opt("b_p", "B, P"),
    opt("m_d", "M, D"),
    opt("mb_db_p", "MB, DB, P"),
    opt("mb_mb2_db_p", "MB, MB2, DB, P"),
    opt("mb_ml_d", "MB, ML, D"),
    opt("mb_ml_db_dl", "MB, ML, DB, DL"),
    opt("mb_ml_mm_d", "MB, ML, MM, D"),
    opt("mb_ml_db_dl_d", "MB, ML, DB, DL, D"),
    opt("c_shaped", "C-Shaped"),
    opt("other", "Other (custom)"),
];

/// Label of the `other` configuration, replaced by the custom canal names.
pub const OTHER_CONFIGURATION_LABEL: &str = "Other (custom)";

pub const WORKING_LENGTH_METHODS: &[ClinicalOption] = &[
    opt("apex_locator", "Electronic Apex Locator"),
    opt("radiograph", "Radiograph"),
    opt("cbct", "CBCT"),
    opt("paper_point", "Paper Point"),
    opt("tactile", "Tactile"),
];

pub const CORONAL_FLARE: &[ClinicalOption] = &[
    opt("gates_glidden", "Gates Glidden"),
    opt("orifice_opener", "Orifice Opener"),
    opt("protaper_sx", "ProTaper SX"),
    opt("ultrasonics", "Ultrasonics"),
];

pub const REFERENCE_POINTS: &[ClinicalOption] = &[
    opt("b_cusp", "B cusp"),
    opt("l_cusp", "L cusp"),
    opt("p_cusp", "P cusp"),
    opt("mb_cusp", "MB cusp"),
    opt("db_cusp", "DB cusp"),
    opt("ml_cusp", "ML cusp"),
    opt("dl_cusp", "DL cusp"),
    opt("incisal_edge", "incisal edge"),
];

pub const FILE_SYSTEMS: &[ClinicalOption] = &[
    opt("protaper_gold", "ProTaper Gold"),
    opt("protaper_ultimate", "ProTaper Ultimate"),
    opt("waveone_gold", "WaveOne Gold"),
    opt("vortex_blue", "Vortex Blue"),
    opt("reciproc_blue", "Reciproc Blue"),
    opt("hyflex_edm", "HyFlex EDM"),
    opt("trunatomy", "TruNatomy"),
    opt("hand_files", "Hand Files"),
];

pub const TAPERS: &[ClinicalOption] = &[
    opt("02", ".02"),
    opt("03", ".03"),
    opt("04", ".04"),
    opt("05", ".05"),
    opt("06", ".06"),
    opt("07", ".07"),
    opt("08", ".08"),
    opt("variable", "variable taper"),
];

pub const OBTURATION_TECHNIQUES: &[ClinicalOption] = &[
    opt("warm_vertical", "Warm Vertical Compaction"),
    opt("continuous_wave", "Continuous Wave"),
    opt("lateral_condensation", "Cold Lateral Condensation"),
    opt("single_cone", "Single Cone"),
    opt("carrier_based", "Carrier-Based"),
];

pub const OBTURATION_MATERIALS: &[ClinicalOption] = &[
    opt("gutta_percha", "Gutta-Percha"),
    opt("bc_gutta_percha", "Bioceramic-Coated Gutta-Percha"),
    opt("mta", "MTA"),
    opt("biodentine", "Biodentine"),
];

pub const SEALERS: &[ClinicalOption] = &[
    opt("ah_plus", "AH Plus"),
    opt("bc_sealer", "BC Sealer"),
    opt("roth", "Roth's Sealer"),
    opt("sealapex", "Sealapex"),
    opt("none", "None"),
];

/// Irrigants and activation techniques share one multi-select; technique
/// values arrive with a `tech_` prefix.
pub const IRRIGATION: &[ClinicalOption] = &[
    opt("naocl_3", "NaOCl 3%"),
    opt("naocl_525", "NaOCl 5.25%"),
    opt("edta_17", "EDTA 17%"),
    opt("chx_2", "CHX 2%"),
    opt("saline", "Sterile Saline"),
    opt("passive_ultrasonic", "Passive Ultrasonic Activation"),
    opt("sonic", "Sonic Activation"),
    opt("negative_pressure", "Negative Pressure Irrigation"),
    opt("xp_finisher", "XP-endo Finisher"),
    opt("gentlewave", "GentleWave"),
];

pub const MEDICAMENTS: &[ClinicalOption] = &[
    opt("none", "None"),
    opt("calcium_hydroxide", "Calcium Hydroxide"),
    opt("ledermix", "Ledermix"),
    opt("triple_antibiotic", "Triple Antibiotic Paste"),
];

pub const RESTORATIONS: &[ClinicalOption] = &[
    opt("cotton_cavit", "Cotton Pellet and Cavit"),
    opt("sponge_cavit", "Sponge and Cavit"),
    opt("irm", "IRM"),
    opt("glass_ionomer", "Glass Ionomer"),
    opt("composite", "Composite"),
    opt("core_buildup", "Composite Core Build-Up"),
    opt("fiber_post_core", "Fiber Post and Core"),
];

pub const COMPLICATIONS: &[ClinicalOption] = &[
    opt("none", "None"),
    opt("separated_instrument", "Separated Instrument"),
    opt("perforation", "Perforation"),
    opt("ledge", "Ledge Formation"),
    opt("transportation", "Canal Transportation"),
    opt("naocl_accident", "Sodium Hypochlorite Accident"),
    opt("underfill", "Underextended Obturation"),
    opt("overfill", "Overextended Obturation"),
    opt("unable_to_negotiate", "Unable to Negotiate Calcified Canal"),
];

pub const POST_OP_INSTRUCTIONS: &[ClinicalOption] = &[
    opt("verbal_written", "Verbal and written post-op instructions given"),
    opt("analgesics", "Analgesics as needed"),
    opt("antibiotics", "Antibiotics prescribed"),
    opt("avoid_chewing", "Avoid chewing on the treated tooth"),
    opt("final_restoration", "Return to general dentist for final restoration"),
    opt("call_if_swelling", "Call the office if swelling develops"),
];

pub const NEXT_VISIT: &[ClinicalOption] = &[
    opt("obturation", "Obturation"),
    opt("continue_instrumentation", "Continue Instrumentation"),
    opt("medicament_change", "Medicament Change"),
    opt("surgical_phase", "Surgical Phase"),
    opt("review", "Review"),
    opt("none", "None"),
];

pub const FOLLOW_UP: &[ClinicalOption] = &[
    opt("6_months", "6-Month Recall"),
    opt("12_months", "12-Month Recall"),
    opt("24_months", "24-Month Recall"),
    opt("as_needed", "As Needed"),
];

pub const REFERRALS: &[ClinicalOption] = &[
    opt("none", "None"),
    opt("general_dentist", "Return to General Dentist"),
    opt("oral_surgeon", "Oral and Maxillofacial Surgeon"),
    opt("periodontist", "Periodontist"),
    opt("prosthodontist", "Prosthodontist"),
    opt("physician", "Physician"),
];

/// Materials and techniques recorded under surgical and vital-pulp procedures.
pub const PROCEDURE_OPTIONS: &[ClinicalOption] = &[
    opt("sulcular", "Sulcular Flap"),
    opt("papilla_base", "Papilla-Base Flap"),
    opt("submarginal", "Submarginal Flap"),
    opt("ultrasonic_tips", "Ultrasonic Tips"),
    opt("mta", "MTA"),
    opt("biodentine", "Biodentine"),
    opt("bc_putty", "Bioceramic Putty"),
    opt("calcium_hydroxide", "Calcium Hydroxide"),
    opt("blood_clot", "Induced Blood Clot"),
    opt("prf", "Platelet-Rich Fibrin"),
    opt("triple_antibiotic", "Triple Antibiotic Paste"),
    opt("flexible_splint", "Flexible Splint"),
    opt("suture_splint", "Suture Splint"),
    opt("partial", "Partial Pulpotomy"),
    opt("cervical", "Cervical Pulpotomy"),
];
