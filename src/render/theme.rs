//! Stylesheet and static content

pub const PAGE_TITLE: &str = "Futuristic Breast Cancer Prediction";

pub const MALIGNANT_ICON_URL: &str =
    "https://static.vecteezy.com/system/resources/previews/010/400/390/non_2x/information-risk-icon-healthcare-and-medical-icon-vector.jpg";
pub const BENIGN_ICON_URL: &str =
    "https://img.freepik.com/premium-vector/medical-health-icon-medical-danger-save-plus-icon_786080-27.jpg";
pub const AWARENESS_IMAGE_URL: &str =
    "https://media.springernature.com/lw685/springer-static/image/art%3A10.1038%2Fs41392-024-02108-4/MediaObjects/41392_2024_2108_Fig1_HTML.png?as=webp";
pub const AWARENESS_LINK_URL: &str = "https://www.cancer.org/cancer/breast-cancer.html";

pub const STYLESHEET: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    background: #0f0c29;
    background: radial-gradient(circle at 50% 50%, #0f0c29, #302b63, #24243e);
    font-family: 'Segoe UI', sans-serif;
    color: #fff;
    overflow-x: hidden;
}
.layout { display: flex; align-items: flex-start; gap: 24px; padding: 24px; }
.sidebar {
    flex: 0 0 300px;
    background: linear-gradient(to bottom, #ff6a00, #ee0979);
    color: #fff;
    border-radius: 15px;
    padding: 15px;
    max-height: calc(100vh - 78px);
    overflow-y: auto;
}
.sidebar label { display: block; font-size: 0.85em; margin-top: 10px; }
.sidebar input[type=number] {
    width: 100%;
    box-sizing: border-box;
    padding: 6px;
    border-radius: 8px;
    border: none;
}
.main { flex: 1; min-width: 0; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }

.card { perspective: 1500px; margin: 20px 0; }
.card-inner {
    position: relative;
    width: 100%;
    height: 250px;
    transition: transform 0.8s;
    transform-style: preserve-3d;
}
.card:hover .card-inner { transform: rotateY(180deg) scale(1.05); }
.card-front, .card-back {
    position: absolute;
    width: 100%;
    height: 100%;
    box-sizing: border-box;
    border-radius: 20px;
    backface-visibility: hidden;
    padding: 20px;
    box-shadow: 0 0 15px rgba(255,255,255,0.3);
    border: 2px solid transparent;
    animation: glow 2s infinite alternate;
}
.card-front { background: rgba(20, 20, 40, 0.9); }
.card-back { background: rgba(60, 10, 30, 0.95); transform: rotateY(180deg); }

@keyframes glow {
    0% { box-shadow: 0 0 15px #ff0080, 0 0 30px #ff0080; }
    50% { box-shadow: 0 0 25px #ff00ff, 0 0 50px #ff00ff; }
    100% { box-shadow: 0 0 15px #ff0080, 0 0 30px #ff0080; }
}

h1, h2, h3 { color: #ffffff; font-weight: bold; }
p { color: #ffffff; font-weight: bold; }

button {
    margin-top: 16px;
    width: 100%;
    border: none;
    border-radius: 12px;
    background: linear-gradient(to right, #00f260, #0575e6);
    color: #fff;
    font-weight: bold;
    padding: 0.6em 1.2em;
    cursor: pointer;
    transition: all 0.3s ease-in-out;
}
button:hover { box-shadow: 0 0 15px #00f260, 0 0 30px #0575e6; transform: scale(1.08); }

a { color: #00ffcc; font-weight: bold; text-decoration: none; }

.chart { width: 100%; max-width: 900px; }
.chart svg { width: 100%; height: auto; }
.error-banner {
    background: rgba(238, 9, 121, 0.25);
    border: 2px solid #ee0979;
    border-radius: 12px;
    padding: 12px 18px;
}
hr { border: none; border-top: 1px solid rgba(255,255,255,0.3); margin: 32px 0; }
"#;
