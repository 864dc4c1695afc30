//! Localization
//!
//! The active [`Language`] is read from a [`PreferenceStore`] at startup and
//! changed only through [`Localizer::set`], which persists the choice and
//! notifies every subscriber so views re-render with the new strings.
//!
//! Translation keys are a closed enum: looking up a string that does not
//! exist is a compile error, not a runtime miss.

use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceError;
use crate::prefs::PreferenceStore;

/// Preference key holding the language code
pub const LANGUAGE_KEY: &str = "lang";

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ne,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ne];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ne => "ne",
        }
    }

    /// The language's name written in itself, for the language picker
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ne => "नेपाली",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ne" => Ok(Language::Ne),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

macro_rules! translations {
    ($($key:ident => $en:literal, $ne:literal;)*) => {
        /// Translatable interface strings
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($key,)*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$key,)*];
        }

        /// Look up `key` in the table for `language`
        pub fn translate(language: Language, key: Key) -> &'static str {
            match (language, key) {
                $(
                    (Language::En, Key::$key) => $en,
                    (Language::Ne, Key::$key) => $ne,
                )*
            }
        }
    };
}

translations! {
    Tagline => "Study smarter with shared notes", "साझा नोट्ससँग अझ राम्रो पढौं";
    HeroBlurb => "Curated notes for Class 11 & 12. Friendly. Minimal. Fast.",
        "कक्षा ११ र १२ का लागि छानिएका नोट्स। सरल। छिटो।";
    RequestNotes => "Request Notes", "नोट्स माग्नुहोस्";
    ContributeNotes => "Contribute Notes", "नोट्स योगदान गर्नुहोस्";
    FeaturedContributors => "Featured Contributors", "विशेष योगदानकर्ता";
    LatestUploads => "Latest Uploads", "नयाँ अपलोडहरू";
    Search => "Search", "खोज्नुहोस्";
    SearchPlaceholder => "Search notes, subjects, chapters", "नोट्स, विषय, अध्याय खोज्नुहोस्";
    LoadMore => "Load more", "थप हेर्नुहोस्";
    NoResults => "No notes found.", "कुनै नोट्स भेटिएन।";
    NavHome => "Home", "गृह";
    NavSearch => "Search", "खोज";
    NavUpload => "Upload", "अपलोड";
    NavPoints => "Points", "अंक";
    NavAbout => "About", "बारेमा";
    Language => "Language", "भाषा";
    UploadHint => "Store the PDF in Google Drive and paste a view-only link.",
        "PDF गुगल ड्राइभमा राखी हेर्न मात्र मिल्ने लिङ्क टाँस्नुहोस्।";
    FieldTitle => "Title", "शीर्षक";
    FieldClass => "Class (11/12)", "कक्षा (११/१२)";
    FieldCollege => "College (LBA/Other)", "कलेज (LBA/अन्य)";
    FieldSubject => "Subject", "विषय";
    FieldTags => "Chapters/Tags (comma separated)", "अध्याय/ट्यागहरू (अल्पविरामले छुट्याउनुहोस्)";
    FieldPages => "Estimated pages", "अनुमानित पृष्ठ";
    FieldDriveLink => "Google Drive link (view-only)", "गुगल ड्राइभ लिङ्क (हेर्न मात्र)";
    FieldName => "Your name (optional)", "तपाईंको नाम (ऐच्छिक)";
    Submit => "Submit", "पेश गर्नुहोस्";
    Submitting => "Submitting...", "पेश हुँदैछ...";
    Cancel => "Cancel", "रद्द गर्नुहोस्";
    UploadSuccess => "Thanks! Your notes were sent for review.",
        "धन्यवाद! तपाईंको नोट्स समीक्षाका लागि पठाइयो।";
    ZoomIn => "Zoom in", "ठूलो";
    ZoomOut => "Zoom out", "सानो";
    ResetView => "Reset", "रिसेट";
    PreviousPage => "Previous", "अघिल्लो";
    NextPage => "Next", "अर्को";
    Page => "Page", "पृष्ठ";
    OpenDocument => "Open / Download", "खोल्नुहोस् / डाउनलोड";
    PreviewUnavailable => "The preview could not be loaded here. Open the document directly instead.",
        "पूर्वावलोकन यहाँ लोड हुन सकेन। कागजात सिधै खोल्नुहोस्।";
    UploadedBy => "Uploaded by", "अपलोडकर्ता";
    Leaderboard => "Leaderboard", "अग्रता सूची";
    PointsShort => "pts", "अंक";
    AboutTitle => "About NoteBuddy", "NoteBuddy बारे";
    AboutBody => "NoteBuddy collects study notes shared by students and publishes them after review.",
        "NoteBuddy विद्यार्थीहरूले साझा गरेका नोट्स समीक्षापछि प्रकाशित गर्छ।";
    FaqHeading => "Frequently asked questions", "बारम्बार सोधिने प्रश्नहरू";
    FaqUploadQ => "How do I share my notes?", "मेरो नोट्स कसरी साझा गर्ने?";
    FaqUploadA => "Upload the PDF to Google Drive, make the link view-only, and submit it with the upload button.",
        "PDF गुगल ड्राइभमा अपलोड गरी लिङ्क हेर्न मात्र बनाउनुहोस्, अनि अपलोड बटनबाट पेश गर्नुहोस्।";
    FaqPointsQ => "What are Knowledge Points?", "ज्ञान अंक के हो?";
    FaqPointsA => "Every accepted upload earns points that place you on the leaderboard.",
        "स्वीकृत हरेक अपलोडले अंक दिन्छ र तपाईंलाई अग्रता सूचीमा राख्छ।";
    FaqReviewQ => "Why isn't my upload visible yet?", "मेरो अपलोड किन देखिँदैन?";
    FaqReviewA => "Uploads appear once an admin has reviewed and accepted them.",
        "एडमिनले समीक्षा गरी स्वीकृत गरेपछि मात्र अपलोड देखिन्छ।";
    NotFoundTitle => "Page not found", "पृष्ठ भेटिएन";
    GoHome => "Go home", "गृहपृष्ठमा जानुहोस्";
    Loading => "Loading...", "लोड हुँदैछ...";
    LeaderboardUnavailable => "Could not load the leaderboard.", "अग्रता सूची लोड हुन सकेन।";
    AdminTitle => "Admin", "एडमिन";
    Username => "Username", "प्रयोगकर्ता नाम";
    Password => "Password", "पासवर्ड";
    SignIn => "Sign in", "साइन इन";
    SigningIn => "Signing in...", "साइन इन हुँदैछ...";
    Refresh => "Refresh", "रिफ्रेस";
    LogOut => "Log out", "लग आउट";
    PendingCount => "pending", "बाँकी";
    NoPending => "No uploads waiting for review.", "समीक्षाका लागि कुनै अपलोड बाँकी छैन।";
    Accept => "Accept", "स्वीकार";
    Reject => "Reject", "अस्वीकार";
    AcceptUpload => "Accept upload", "अपलोड स्वीकार गर्नुहोस्";
    RejectUpload => "Reject upload", "अपलोड अस्वीकार गर्नुहोस्";
    PointsToAward => "Points to award", "दिइने अंक";
    RejectReason => "Reason (optional)", "कारण (ऐच्छिक)";
    Confirm => "Confirm", "पुष्टि गर्नुहोस्";
    UploadAccepted => "Upload accepted", "अपलोड स्वीकृत भयो";
    UploadRejected => "Upload rejected", "अपलोड अस्वीकृत भयो";
}

type Listener = Box<dyn Fn(Language)>;

/// Holds the active language and propagates changes to subscribers
pub struct Localizer<S> {
    store: S,
    language: Language,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> Localizer<S> {
    /// Read the persisted language, falling back to the default when the
    /// stored value is missing or unsupported
    pub fn new(store: S) -> Self {
        let language = match store.load(LANGUAGE_KEY) {
            Some(code) => code.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, Language::default());
                Language::default()
            }),
            None => Language::default(),
        };

        Self {
            store,
            language,
            listeners: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translated string for the active language
    pub fn t(&self, key: Key) -> &'static str {
        translate(self.language, key)
    }

    /// Register a listener called after every language change
    pub fn subscribe(&mut self, listener: impl Fn(Language) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switch language, persist it and notify subscribers.
    ///
    /// The in-memory language switches even when persisting fails; the
    /// persistence error is returned so the caller can surface it.
    pub fn set(&mut self, language: Language) -> Result<(), PreferenceError> {
        let persisted = self.store.save(LANGUAGE_KEY, language.code());

        if language != self.language {
            self.language = language;
            for listener in &self.listeners {
                listener(language);
            }
        }

        persisted
    }
}
