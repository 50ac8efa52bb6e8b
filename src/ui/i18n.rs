//! Label packs for the two supported languages.
//!
//! The controller only remembers which [`Language`] is selected; the renderer
//! looks labels up here.

use crate::portal::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePack {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub logout: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub full_name: &'static str,
    pub no_account: &'static str,
    pub have_account: &'static str,
    pub sign_up: &'static str,
    pub sign_in: &'static str,
    pub welcome: &'static str,
    pub create_account: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub complaint: &'static str,
    pub submit: &'static str,
    pub selected_language: &'static str,
    pub my_complaints: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub pending: &'static str,
}

const EN: LanguagePack = LanguagePack {
    app_name: "Nirakshak",
    tagline: "AI-Powered Governance System",
    login: "Login",
    register: "Register",
    logout: "Logout",
    email: "Email Address",
    password: "Password",
    confirm_password: "Confirm Password",
    full_name: "Full Name",
    no_account: "Don't have an account?",
    have_account: "Already have an account?",
    sign_up: "Sign Up",
    sign_in: "Sign In",
    welcome: "Welcome back",
    create_account: "Create your account",
    title: "AI Governance Portal",
    subtitle: "Classify and Prioritize Citizen Grievances Automatically",
    complaint: "Enter your complaint",
    submit: "Submit Complaint",
    selected_language: "Language",
    my_complaints: "My Complaints",
    priority: "Priority",
    status: "Status",
    pending: "Pending",
};

const HI: LanguagePack = LanguagePack {
    app_name: "निरक्षक",
    tagline: "एआई-संचालित शासन प्रणाली",
    login: "लॉग इन करें",
    register: "रजिस्टर करें",
    logout: "लॉग आउट",
    email: "ईमेल पता",
    password: "पासवर्ड",
    confirm_password: "पासवर्ड की पुष्टि करें",
    full_name: "पूरा नाम",
    no_account: "खाता नहीं है?",
    have_account: "पहले से खाता है?",
    sign_up: "साइन अप करें",
    sign_in: "साइन इन करें",
    welcome: "वापसी पर स्वागत है",
    create_account: "अपना खाता बनाएं",
    title: "एआई गवर्नेंस पोर्टल",
    subtitle: "शिकायतों को स्वचालित रूप से वर्गीकृत और प्राथमिकता दें",
    complaint: "अपनी शिकायत दर्ज करें",
    submit: "शिकायत सबमिट करें",
    selected_language: "भाषा",
    my_complaints: "मेरी शिकायतें",
    priority: "प्राथमिकता",
    status: "स्थिति",
    pending: "लंबित",
};

impl LanguagePack {
    pub fn for_language(language: Language) -> &'static LanguagePack {
        match language {
            Language::En => &EN,
            Language::Hi => &HI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_differ_per_language() {
        let en = LanguagePack::for_language(Language::En);
        let hi = LanguagePack::for_language(Language::Hi);
        assert_eq!(en.app_name, "Nirakshak");
        assert_eq!(hi.pending, "लंबित");
        assert_ne!(en.submit, hi.submit);
    }
}
