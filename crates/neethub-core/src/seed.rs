//! Built-in sample question bank used to populate an empty deployment.

use crate::types::QuestionDraft;

/// Number of questions a single population run inserts.
pub const SAMPLE_SET_SIZE: usize = 100;

struct Seed {
    subject: &'static str,
    chapter: &'static str,
    topic: &'static str,
    question: &'static str,
    options: [&'static str; 4],
    correct: u8,
    explanation: &'static str,
    difficulty: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        subject: "Physics",
        chapter: "Laws of Motion",
        topic: "Newton's Laws",
        question: "What is the SI unit of force?",
        options: ["Newton", "Joule", "Watt", "Pascal"],
        correct: 0,
        explanation: "Force is mass × acceleration, SI unit is kg⋅m/s² = Newton.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Laws of Motion",
        topic: "Newton's Laws",
        question: "A body of mass 2 kg is moving with velocity 10 m/s. What is its momentum?",
        options: ["5 kg⋅m/s", "20 kg⋅m/s", "12 kg⋅m/s", "8 kg⋅m/s"],
        correct: 1,
        explanation: "Momentum = mass × velocity = 2 × 10 = 20 kg⋅m/s.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Laws of Motion",
        topic: "Friction",
        question: "Which type of friction is the largest?",
        options: ["Rolling", "Sliding", "Static", "Fluid"],
        correct: 2,
        explanation: "Static friction is always greater than kinetic (sliding/rolling) friction.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Work, Energy and Power",
        topic: "Work and Energy",
        question: "What is the SI unit of work?",
        options: ["Newton", "Joule", "Watt", "Pascal"],
        correct: 1,
        explanation: "Work = Force × Displacement, SI unit is Joule (J).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Work, Energy and Power",
        topic: "Power",
        question: "Power is defined as rate of?",
        options: ["Work done", "Energy consumed", "Force applied", "Both A and B"],
        correct: 3,
        explanation: "Power = Work/Time = Energy/Time, so both A and B are correct.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Physics",
        chapter: "Gravitation",
        topic: "Universal Law of Gravitation",
        question: "The value of gravitational constant G is?",
        options: ["6.67 × 10⁻¹¹ Nm²/kg²", "9.8 m/s²", "3 × 10⁸ m/s", "1.6 × 10⁻¹⁹ C"],
        correct: 0,
        explanation: "Universal gravitational constant G = 6.67 × 10⁻¹¹ Nm²/kg².",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Electric Charges and Fields",
        topic: "Coulomb's Law",
        question: "Coulomb's law is valid for?",
        options: ["Point charges", "Moving charges", "Magnetic charges", "All of these"],
        correct: 0,
        explanation: "Coulomb's law applies to stationary point charges only.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Physics",
        chapter: "Current Electricity",
        topic: "Ohm's Law",
        question: "Ohm's law states that V is proportional to?",
        options: ["I", "I²", "1/I", "√I"],
        correct: 0,
        explanation: "Ohm's law: V = IR, so V is directly proportional to I.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Physics",
        chapter: "Wave Optics",
        topic: "Interference",
        question: "In Young's double slit experiment, fringe width is?",
        options: ["λD/d", "λd/D", "Dd/λ", "D/λd"],
        correct: 0,
        explanation: "Fringe width β = λD/d where λ=wavelength, D=distance, d=slit separation.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Physics",
        chapter: "Atoms and Nuclei",
        topic: "Atomic Models",
        question: "Who proposed the nuclear model of atom?",
        options: ["Thomson", "Rutherford", "Bohr", "Dalton"],
        correct: 1,
        explanation: "Rutherford proposed nuclear model based on alpha scattering experiment.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Some Basic Concepts of Chemistry",
        topic: "Mole Concept",
        question: "What is Avogadro's number?",
        options: ["6.022 × 10²³", "6.022 × 10²⁴", "1.6 × 10⁻¹⁹", "3.0 × 10⁸"],
        correct: 0,
        explanation: "Avogadro's number = 6.022 × 10²³ mol⁻¹, number of particles in one mole.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Structure of Atom",
        topic: "Quantum Numbers",
        question: "How many orbitals are present in n=3 shell?",
        options: ["3", "6", "9", "12"],
        correct: 2,
        explanation: "Number of orbitals = n² = 3² = 9 orbitals in n=3 shell.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Classification of Elements",
        topic: "Periodic Properties",
        question: "Ionization energy increases across a period because?",
        options: ["Nuclear charge increases", "Atomic size decreases", "Shielding remains same", "All of these"],
        correct: 3,
        explanation: "All three factors contribute to increase in ionization energy across period.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Chemical Bonding",
        topic: "VSEPR Theory",
        question: "Shape of NH₃ molecule is?",
        options: ["Tetrahedral", "Pyramidal", "Planar", "Linear"],
        correct: 1,
        explanation: "NH₃ has pyramidal shape due to one lone pair on nitrogen.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "States of Matter",
        topic: "Gaseous State",
        question: "Ideal gas equation is?",
        options: ["PV = nRT", "P = ρRT", "PV = RT", "V = nRT"],
        correct: 0,
        explanation: "Ideal gas equation: PV = nRT, combining all gas laws.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Thermodynamics",
        topic: "First Law",
        question: "First law of thermodynamics is based on?",
        options: ["Energy conservation", "Entropy", "Enthalpy", "Free energy"],
        correct: 0,
        explanation: "First law states energy cannot be created or destroyed (conservation).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Equilibrium",
        topic: "Chemical Equilibrium",
        question: "At equilibrium, rate of forward reaction is?",
        options: ["Greater than backward", "Less than backward", "Equal to backward", "Zero"],
        correct: 2,
        explanation: "At equilibrium, forward rate = backward rate (dynamic equilibrium).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Redox Reactions",
        topic: "Oxidation and Reduction",
        question: "In redox reaction, oxidation is?",
        options: ["Gain of electrons", "Loss of electrons", "Gain of protons", "Loss of neutrons"],
        correct: 1,
        explanation: "Oxidation is loss of electrons (OIL - Oxidation Is Loss).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Chemistry",
        chapter: "Hydrogen",
        topic: "Properties of Hydrogen",
        question: "Position of hydrogen in periodic table is?",
        options: ["Group 1", "Group 17", "Both", "None"],
        correct: 2,
        explanation: "Hydrogen shows properties of both alkali metals and halogens.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Chemistry",
        chapter: "s-Block Elements",
        topic: "Alkali Metals",
        question: "Most reactive alkali metal is?",
        options: ["Li", "Na", "K", "Cs"],
        correct: 3,
        explanation: "Reactivity increases down group, Cesium is most reactive alkali metal.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "The Living World",
        topic: "Taxonomic Categories",
        question: "Basic unit of classification is?",
        options: ["Species", "Genus", "Family", "Order"],
        correct: 0,
        explanation: "Species is the basic unit and lowest rank in taxonomic hierarchy.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Biological Classification",
        topic: "Five Kingdom Classification",
        question: "Fungi are placed in which kingdom?",
        options: ["Monera", "Protista", "Fungi", "Plantae"],
        correct: 2,
        explanation: "Fungi form separate kingdom due to chitinous wall and heterotrophic nutrition.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Plant Kingdom",
        topic: "Algae",
        question: "Green algae contain which pigment?",
        options: ["Chlorophyll a and b", "Chlorophyll a and c", "Phycoerythrin", "Fucoxanthin"],
        correct: 0,
        explanation: "Green algae (Chlorophyceae) contain chlorophyll a and b like plants.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Animal Kingdom",
        topic: "Invertebrates",
        question: "Insects belong to phylum?",
        options: ["Mollusca", "Arthropoda", "Annelida", "Echinodermata"],
        correct: 1,
        explanation: "Insects are arthropods with jointed legs and chitinous exoskeleton.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Morphology of Flowering Plants",
        topic: "Root, Stem, Leaf",
        question: "Tap root system is found in?",
        options: ["Monocots", "Dicots", "Both", "None"],
        correct: 1,
        explanation: "Tap root system with primary root is characteristic of dicots.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Cell: The Unit of Life",
        topic: "Cell Organelles",
        question: "Powerhouse of cell is?",
        options: ["Mitochondria", "Ribosome", "Golgi body", "ER"],
        correct: 0,
        explanation: "Mitochondria produce ATP through cellular respiration (powerhouse).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Biomolecules",
        topic: "Enzymes",
        question: "Enzymes are mostly?",
        options: ["Proteins", "Carbohydrates", "Lipids", "Nucleic acids"],
        correct: 0,
        explanation: "Most enzymes are proteinaceous, few are RNA (ribozymes).",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Cell Cycle and Cell Division",
        topic: "Mitosis",
        question: "Number of chromosomes remain same in?",
        options: ["Mitosis", "Meiosis", "Both", "None"],
        correct: 0,
        explanation: "Mitosis is equational division, chromosome number remains same.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Photosynthesis",
        topic: "Light Reaction",
        question: "Photolysis of water occurs in?",
        options: ["PS I", "PS II", "Both", "Dark reaction"],
        correct: 1,
        explanation: "Water splitting (photolysis) occurs in Photosystem II.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Biology",
        chapter: "Respiration in Plants",
        topic: "Glycolysis",
        question: "Glycolysis occurs in?",
        options: ["Cytoplasm", "Mitochondria", "Chloroplast", "Nucleus"],
        correct: 0,
        explanation: "Glycolysis is first step of respiration occurring in cytoplasm.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Digestion and Absorption",
        topic: "Digestive System",
        question: "Digestion of protein starts in?",
        options: ["Mouth", "Stomach", "Small intestine", "Large intestine"],
        correct: 1,
        explanation: "Protein digestion begins in stomach by pepsin enzyme.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Breathing and Exchange of Gases",
        topic: "Respiratory System",
        question: "Respiratory quotient of fats is?",
        options: ["1.0", "0.7", "0.9", "1.2"],
        correct: 1,
        explanation: "RQ of fats is 0.7 as they require more oxygen for oxidation.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Biology",
        chapter: "Body Fluids and Circulation",
        topic: "Blood",
        question: "Universal donor blood group is?",
        options: ["A", "B", "AB", "O"],
        correct: 3,
        explanation: "O blood group lacks A and B antigens, hence universal donor.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Excretory Products and Elimination",
        topic: "Urine Formation",
        question: "Functional unit of kidney is?",
        options: ["Nephron", "Neuron", "Alveoli", "Villus"],
        correct: 0,
        explanation: "Nephron is structural and functional unit performing ultrafiltration.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Locomotion and Movement",
        topic: "Muscular System",
        question: "Cardiac muscles are?",
        options: ["Voluntary striated", "Involuntary striated", "Voluntary non-striated", "Involuntary non-striated"],
        correct: 1,
        explanation: "Cardiac muscles are involuntary and striated, found only in heart.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Neural Control and Coordination",
        topic: "Nervous System",
        question: "Synapse is junction between?",
        options: ["Two neurons", "Neuron and muscle", "Both A and B", "Two muscles"],
        correct: 2,
        explanation: "Synapse is junction between two neurons or neuron and effector organ.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Chemical Coordination",
        topic: "Hormones",
        question: "Master gland is?",
        options: ["Thyroid", "Pituitary", "Adrenal", "Pancreas"],
        correct: 1,
        explanation: "Pituitary controls other glands, hence called master gland.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Reproduction in Organisms",
        topic: "Asexual Reproduction",
        question: "Budding occurs in?",
        options: ["Hydra", "Planaria", "Amoeba", "Paramecium"],
        correct: 0,
        explanation: "Hydra reproduces asexually by budding method.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Sexual Reproduction in Flowering Plants",
        topic: "Pollination",
        question: "Transfer of pollen to stigma is called?",
        options: ["Fertilization", "Pollination", "Germination", "Dispersal"],
        correct: 1,
        explanation: "Pollination is transfer of pollen grains from anther to stigma.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Human Reproduction",
        topic: "Male Reproductive System",
        question: "Sperms are produced in?",
        options: ["Vas deferens", "Seminiferous tubules", "Prostate", "Urethra"],
        correct: 1,
        explanation: "Spermatogenesis occurs in seminiferous tubules of testes.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Principles of Inheritance",
        topic: "Mendel's Laws",
        question: "Law of segregation is Mendel's?",
        options: ["First law", "Second law", "Third law", "Fourth law"],
        correct: 0,
        explanation: "Law of segregation (separation of alleles) is Mendel's first law.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Molecular Basis of Inheritance",
        topic: "DNA Structure",
        question: "DNA replication is?",
        options: ["Conservative", "Semiconservative", "Dispersive", "Random"],
        correct: 1,
        explanation: "DNA replication is semiconservative (Meselson-Stahl experiment).",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Biology",
        chapter: "Evolution",
        topic: "Darwin's Theory",
        question: "Survival of the fittest was proposed by?",
        options: ["Lamarck", "Darwin", "Wallace", "Mendel"],
        correct: 1,
        explanation: "Darwin's theory of natural selection emphasizes survival of fittest.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Human Health and Disease",
        topic: "Immunity",
        question: "Antibodies are?",
        options: ["Proteins", "Carbohydrates", "Lipids", "Nucleic acids"],
        correct: 0,
        explanation: "Antibodies are immunoglobulins (proteins) that fight antigens.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Biotechnology Principles",
        topic: "Genetic Engineering",
        question: "PCR is used for?",
        options: ["DNA amplification", "DNA sequencing", "Protein synthesis", "RNA splicing"],
        correct: 0,
        explanation: "PCR (Polymerase Chain Reaction) amplifies DNA in vitro.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Biology",
        chapter: "Organisms and Populations",
        topic: "Population Ecology",
        question: "Study of population is called?",
        options: ["Synecology", "Autecology", "Demography", "Ecology"],
        correct: 2,
        explanation: "Demography studies population size, density, and age distribution.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Ecosystem",
        topic: "Energy Flow",
        question: "10% law was given by?",
        options: ["Odum", "Lindeman", "Tansley", "Haeckel"],
        correct: 1,
        explanation: "Lindeman's 10% law states only 10% energy transfers to next level.",
        difficulty: "Moderate",
    },
    Seed {
        subject: "Biology",
        chapter: "Biodiversity and Conservation",
        topic: "Biodiversity",
        question: "Maximum biodiversity is found in?",
        options: ["Tundra", "Desert", "Tropical rainforest", "Grassland"],
        correct: 2,
        explanation: "Tropical rainforests have highest species diversity on Earth.",
        difficulty: "Easy",
    },
    Seed {
        subject: "Biology",
        chapter: "Environmental Issues",
        topic: "Pollution",
        question: "Greenhouse gas is?",
        options: ["CO₂", "CH₄", "N₂O", "All of these"],
        correct: 3,
        explanation: "CO₂, CH₄, N₂O all are greenhouse gases causing global warming.",
        difficulty: "Easy",
    },
];

impl Seed {
    fn draft(&self) -> QuestionDraft {
        QuestionDraft {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct,
            explanation: self.explanation.to_string(),
            subject: self.subject.to_string(),
            chapter: self.chapter.to_string(),
            topic: self.topic.to_string(),
            difficulty: self.difficulty.to_string(),
        }
    }
}

/// Number of hand-written seed questions.
pub fn seed_count() -> usize {
    SEEDS.len()
}

/// The full sample set: every seed once, then numbered variations cycling
/// through the seeds until the set holds [`SAMPLE_SET_SIZE`] questions.
pub fn sample_questions() -> Vec<QuestionDraft> {
    let mut out: Vec<QuestionDraft> = SEEDS.iter().map(Seed::draft).collect();
    let variations = SAMPLE_SET_SIZE.saturating_sub(SEEDS.len());
    for i in 0..variations {
        let mut draft = SEEDS[i % SEEDS.len()].draft();
        draft.question = format!("{} (Variation {})", draft.question, i + 1);
        out.push(draft);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_has_exactly_one_hundred_questions() {
        assert_eq!(sample_questions().len(), SAMPLE_SET_SIZE);
        assert_eq!(seed_count(), 49);
    }

    #[test]
    fn every_sample_question_is_well_formed() {
        for draft in sample_questions() {
            draft.validate().unwrap_or_else(|e| panic!("{}: {}", draft.question, e));
        }
    }

    #[test]
    fn variations_are_numbered_from_one() {
        let set = sample_questions();
        assert_eq!(set[seed_count()].question, "What is the SI unit of force? (Variation 1)");
        assert!(set.last().unwrap().question.ends_with("(Variation 51)"));
        // Variations wrap around to the first seed once every seed was used.
        assert_eq!(
            set[2 * seed_count()].question,
            "What is the SI unit of force? (Variation 50)"
        );
    }

    #[test]
    fn all_three_subjects_are_covered() {
        let set = sample_questions();
        for subject in ["Physics", "Chemistry", "Biology"] {
            assert!(set.iter().any(|q| q.subject == subject));
        }
    }
}
