//! Page stylesheet
//!
//! Style strings are built by plain functions and handed to the page once per
//! render; nothing here touches global state.

use crate::assets::EncodedImage;

/// Gradient used when no background image is available
pub const GRADIENT_FALLBACK: &str = "linear-gradient(135deg, #1e3a2c 0%, #0d2818 100%)";

/// Rule painting the app root: the embedded image when present, the gradient otherwise.
pub fn background_rule(background: Option<&EncodedImage>) -> String {
    match background {
        Some(img) => format!(
            r#".app {{
    background-image: url("{}");
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    background-attachment: fixed;
}}"#,
            img.data_uri()
        ),
        None => format!(".app {{\n    background: {};\n}}", GRADIENT_FALLBACK),
    }
}

/// Card layout, typography and button styles for the portfolio sections
pub const PORTFOLIO_STYLESHEET: &str = r#"
.block-container {
    padding-top: 3rem;
}
/* profile picture */
.profile-img {
    display: block;
    margin-left: auto;
    margin-right: auto;
    border-radius: 50%;
    border: 5px solid #ffffff;
    box-shadow: 0 4px 15px rgba(0,0,0,0.2);
    width: 200px;
    height: 200px;
    object-fit: cover;
}
.main-title {
    font-family: 'Helvetica Neue', sans-serif;
    font-size: 3rem;
    text-align: center;
    color: #ffffff;
    text-shadow: 2px 2px 8px #000000;
    margin-top: -20px;
}
.sub-title {
    font-family: 'Helvetica Neue', sans-serif;
    font-size: 1.5rem;
    text-align: center;
    color: #ffffff;
    text-shadow: 1px 1px 4px #000000;
    margin-bottom: 30px;
}
.card {
    background-color: rgba(255, 255, 255, 0.85);
    border-radius: 15px;
    padding: 25px;
    margin-bottom: 25px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.1);
}
.card-centered {
    text-align: center;
}
.project-title {
    color: #1a1a2e;
    font-weight: 600;
}
.project-subtitle {
    color: #16213e;
}
.progress-label {
    color: #0f3460;
    font-weight: 500;
    margin-top: -10px;
}
.btn {
    border: none;
    color: white;
    border-radius: 8px;
    cursor: pointer;
}
.btn-email {
    background-color: #FF4B4B;
    padding: 10px 20px;
}
.btn-donate {
    background-color: #0070ba;
    padding: 12px 24px;
    font-size: 1rem;
    transition: all 0.3s ease;
}
.footer {
    text-align: center;
    margin-top: 60px;
    color: #ffffff;
    text-shadow: 1px 1px 3px #000;
}
"#;
