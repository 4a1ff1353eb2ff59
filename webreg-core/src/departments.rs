//! Department code table.
//!
//! Subject codes and their descriptions as published in the schedule of
//! classes. Only the codes take part in parsing; the names are kept for
//! display.

/// `(code, description)` pairs, sorted by code.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("AAPI", "Asian American and Pacific Islander Studies"),
    ("AAS", "African American Studies"),
    ("AESE", "Architecture Based Enterprise Systems Engineering"),
    ("AIP", "Academic Internship Program"),
    ("ANAR", "Anthropological Archaeology"),
    ("ANBI", "Anthropology/ Biological Anthropology"),
    ("ANES", "Anesthesiology"),
    ("ANSC", "Anthro/ Sociocultural Anthropology"),
    ("ANTH", "Anthropology"),
    ("AUD", "Audiology"),
    ("AWP", "Analytical Writing Program"),
    ("BENG", "Bioengineering"),
    ("BGGN", "Biology/ Grad/ General"),
    ("BGJC", "Biology/ Grad/ Journal Club"),
    ("BGRD", "Biology/ Grad/ Research Discussion"),
    ("BGSE", "Biology/ Grad/ Seminar"),
    ("BIBC", "Biology/ Biochemistry"),
    ("BICD", "Biology/ Genetics, Cellular and Developmental"),
    ("BIEB", "Biology/ Ecology, Behavior, and Evolutionary"),
    ("BILD", "Biology/ Lower Division"),
    ("BIMM", "Biology/ Molecular Biology, Microbiology"),
    ("BIOM", "Biomedical Sciences"),
    ("BIPN", "Biology/ Animal Physiology and Neuroscience"),
    ("BISP", "Biology/ Special Studies"),
    ("BNFO", "Bioinformatics"),
    ("CAT", "Culture, Art, and Technology"),
    ("CCS", "Climate Change Studies"),
    ("CENG", "Chemical Engineering"),
    ("CGS", "Critical Gender Studies"),
    ("CHEM", "Chemistry and Biochemistry"),
    ("CHIN", "Chinese Studies"),
    ("CLAS", "Classical Studies"),
    ("CLIN", "Clinical Psychology"),
    ("CLRE", "Clinical Research"),
    ("CLSS", "Classics"),
    ("CLX", "Chicanx and Latinx Studies"),
    ("CMM", "Cellular & Molecular Medicine"),
    ("COGR", "Communication/ Graduate"),
    ("COGS", "Cognitive Science"),
    ("COMM", "Communication"),
    ("CONT", "Contemporary Issues"),
    ("CSE", "Computer Science and Engineering"),
    ("CSS", "Computational Social Science"),
    ("DDPM", "Drug Development and Product Management"),
    ("DERM", "Dermatology"),
    ("DOC", "Dimensions of Culture"),
    ("DSC", "Data Science"),
    ("DSE", "Data Science and Engineering"),
    ("DSGN", "Design"),
    ("EAP", "Education Abroad Program"),
    ("ECE", "Electrical and Computer Engineering"),
    ("ECON", "Economics"),
    ("EDS", "Education Studies"),
    ("EMED", "Emergency Medicine"),
    ("ENG", "Engineering"),
    ("ENVR", "Environmental Studies"),
    ("ERC", "Eleanor Roosevelt College"),
    ("ESYS", "Environmental Systems"),
    ("ETHN", "Ethnic Studies"),
    ("ETIM", "Ethnic Studies/ Interdisciplinary Research Methods"),
    ("EXPR", "Exchange Programs"),
    ("FILM", "Film Studies"),
    ("FMPH", "Family Medicine and Public Health"),
    ("FPM", "Family and Preventive Medicine"),
    ("GLBH", "Global Health"),
    ("GMST", "German Studies Program"),
    ("GPCO", "GPS/ Core"),
    ("GPEC", "GPS/ Economics"),
    ("GPGN", "GPS/ General"),
    ("GPIM", "GPS/ International Management"),
    ("GPLA", "GPS/ Language"),
    ("GPPA", "GPS/ Policy Analytics"),
    ("GPPS", "GPS/ Political Science"),
    ("GSS", "Global South Studies"),
    ("HDP", "Human Development Program"),
    ("HDS", "Human Developmental Sciences"),
    ("HIAF", "History of Africa"),
    ("HIEA", "History of East Asia"),
    ("HIEU", "History of Europe"),
    ("HIGL", "History, Global"),
    ("HIGR", "History, Graduate"),
    ("HILA", "History of Latin America"),
    ("HILD", "History, Lower Division"),
    ("HINE", "History of the Near East"),
    ("HISC", "History of Science"),
    ("HITO", "History Topics"),
    ("HIUS", "History of the United States"),
    ("HLAW", "Health Law"),
    ("HMNR", "Human Rights"),
    ("HUM", "Humanities"),
    ("ICAM", "Computing and the Arts"),
    ("ICEP", "Intercampus Exchange Program"),
    ("INTL", "International Studies"),
    ("IRLA", "International Relations/ Pacific Study-Language"),
    ("JAPN", "Japanese Studies"),
    ("JWSP", "Jewish Studies Program"),
    ("LATI", "Latin American Studies"),
    ("LAWS", "Law and Society"),
    ("LHCO", "Leadership/ Health Care Organizations"),
    ("LIAB", "Linguistics/ Arabic"),
    ("LIDS", "Linguistics/ Directed Study-Language"),
    ("LIEO", "Linguistics/ Esperanto"),
    ("LIFR", "Linguistics/ French"),
    ("LIGM", "Linguistics/ German"),
    ("LIGN", "Linguistics/ General"),
    ("LIHI", "Linguistics/ Hindi"),
    ("LIHL", "Linguistics/ Heritage Languages"),
    ("LIIT", "Linguistics/ Italian"),
    ("LIPO", "Linguistics/ Portuguese"),
    ("LISL", "Linguistics/ American Sign Language"),
    ("LISP", "Linguistics/ Spanish"),
    ("LTAF", "Literature/ African"),
    ("LTAM", "Literature of the Americas"),
    ("LTCH", "Literature/ Chinese"),
    ("LTCO", "Literature/ Comparative"),
    ("LTCS", "Literature/ Cultural Studies"),
    ("LTEA", "Literatures/ East Asian"),
    ("LTEN", "Literatures in English"),
    ("LTEU", "Literature/ European and Eurasian"),
    ("LTFR", "Literature/ French"),
    ("LTGK", "Literature/ Greek"),
    ("LTGM", "Literature/ German"),
    ("LTIT", "Literature/ Italian"),
    ("LTKO", "Literature/ Korean"),
    ("LTLA", "Literature/ Latin"),
    ("LTRU", "Literature/ Russian"),
    ("LTSP", "Literature/ Spanish"),
    ("LTTH", "Literature/ Theory"),
    ("LTWL", "Literatures of the World"),
    ("LTWR", "Literature/ Writing"),
    ("MAE", "Mechanical and Aerospace Engineering"),
    ("MATH", "Mathematics"),
    ("MATS", "Materials Science and Engineering"),
    ("MBC", "Marine Biodiversity & Conservation"),
    ("MCWP", "Muir College Writing Program"),
    ("MDE", "Medical Device Engineering"),
    ("MED", "Medicine"),
    ("MGT", "Rady School of Management"),
    ("MGTA", "Rady School of Management Business Analytics"),
    ("MGTF", "Rady School of Management Finance"),
    ("MGTP", "Rady School of Management Professional Accountancy"),
    ("MMW", "Making of the Modern World"),
    ("MSED", "Mathematics and Science Education"),
    ("MSP", "Muir Special Projects"),
    ("MUIR", "Muir College"),
    ("MUS", "Music"),
    ("NANO", "Nanoengineering"),
    ("NEU", "Neurosciences"),
    ("NEUG", "Neurosciences/ Graduate"),
    ("OBG", "Obstetrics and Gynecology"),
    ("OPTH", "Ophthalmology"),
    ("ORTH", "Orthopedics"),
    ("PATH", "Pathology"),
    ("PEDS", "Pediatrics"),
    ("PH", "Public Health"),
    ("PHAR", "Pharmacology"),
    ("PHB", "Public Health/ Biostatistics"),
    ("PHIL", "Philosophy"),
    ("PHLH", "Public Health/ Leadership/ Health Care Organizations"),
    ("PHYA", "Physics/ Astronomy"),
    ("PHYS", "Physics"),
    ("POLI", "Political Science"),
    ("PSY", "Psychiatry"),
    ("PSYC", "Psychology"),
    ("RAD", "Radiology"),
    ("RELI", "Religion, Study of"),
    ("REV", "Revelle College"),
    ("RMAS", "Radiation Medicine and Applied Sciences"),
    ("RMED", "Reproductive Medicine"),
    ("SE", "Structural Engineering"),
    ("SEV", "Seventh College"),
    ("SIO", "Scripps Institution of Oceanography"),
    ("SIOB", "Scripps Institution of Oceanography/ Ocean Biosciences Program"),
    ("SIOC", "Scripps Institution of Oceanography/ Climate, Oceans, Atmosphere Program"),
    ("SIOG", "Scripps Institution of Oceanography/ Geosciences of Earth, Oceans and Planets"),
    ("SOCE", "Sociology/ Individual Research and Honors Project"),
    ("SOCG", "Sociology/ Graduate"),
    ("SOCI", "Sociology"),
    ("SOCL", "Sociology/ Lower Division"),
    ("SOMC", "School of Medicine Core Courses"),
    ("SOMI", "School of Medicine Interdisciplinary"),
    ("SPPH", "SSPPS/ Pharmaceutical Sciences"),
    ("SPPS", "Pharmacy"),
    ("SURG", "Surgery"),
    ("SXTH", "Sixth College"),
    ("SYN", "Synthesis Program"),
    ("TDAC", "Theatre/ Acting"),
    ("TDDE", "Theatre/ Design"),
    ("TDDM", "Dance/ Dance Making"),
    ("TDDR", "Theatre/ Directing and Stage Management"),
    ("TDGE", "Theatre/ General"),
    ("TDGR", "Theatre/ Graduate"),
    ("TDHD", "Dance/ History"),
    ("TDHT", "Theatre/ History & Theory"),
    ("TDMV", "Dance/ Movement"),
    ("TDPF", "Dance/ Performance"),
    ("TDPR", "Theatre Dance/ Practicum"),
    ("TDPW", "Theatre/ Playwriting"),
    ("TDTR", "Dance/ Theory"),
    ("TKS", "Transnational Korean Studies"),
    ("TMC", "Thurgood Marshall College"),
    ("TWS", "Third World Studies"),
    ("UROL", "Urology"),
    ("USP", "Urban Studies and Planning"),
    ("VIS", "Visual Arts"),
    ("WARR", "Warren College"),
    ("WCWP", "Warren College Writing Program"),
    ("WES", "Wireless Embedded Systems"),
];
