//! Content resolver: (root-relative path, template kind) → file content.
//!
//! Keys are full paths (`src/App.js`), never bare file names, so two files
//! with the same name in different directories cannot collide.

use tracing::warn;

use crate::domain::value_objects::TemplateKind;

/// Resolve the content for `path`.
///
/// Paths with no registered content resolve to an empty string. That only
/// happens when the planner and this module disagree, which the tests catch.
pub fn resolve(path: &str, kind: TemplateKind) -> String {
    match lookup(path, kind) {
        Some(content) => content.to_owned(),
        None => {
            warn!(path, template = %kind, "no content registered, writing empty file");
            String::new()
        }
    }
}

/// Registered content for `path`, if any.
pub fn lookup(path: &str, kind: TemplateKind) -> Option<&'static str> {
    use TemplateKind::{Basic, WithRouter};

    match (path, kind) {
        ("public/index.html", _) => Some(INDEX_HTML),
        ("public/favicon.ico", _) => Some(""),
        ("public/manifest.json", _) => Some(WEB_MANIFEST),
        ("src/index.js", _) => Some(INDEX_JS),
        ("src/index.css", _) => Some(INDEX_CSS),
        ("src/App.css", _) => Some(APP_CSS),
        ("src/App.js", Basic) => Some(APP_BASIC),
        ("src/App.js", WithRouter) => Some(APP_ROUTER),
        ("src/components/Home.js", WithRouter) => Some(HOME_PAGE),
        ("src/components/About.js", WithRouter) => Some(ABOUT_PAGE),
        _ => None,
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <link rel="icon" href="%PUBLIC_URL%/favicon.ico" />
    <link rel="manifest" href="%PUBLIC_URL%/manifest.json" />
    <title>React App</title>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

const WEB_MANIFEST: &str = r##"{
  "short_name": "React App",
  "name": "React App",
  "start_url": ".",
  "display": "standalone",
  "theme_color": "#000000",
  "background_color": "#ffffff"
}
"##;

const INDEX_JS: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import './index.css';
import App from './App.js';

const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#;

const INDEX_CSS: &str = r#"body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto';
}
"#;

const APP_CSS: &str = r#".App {
  text-align: center;
  padding: 2rem;
}
"#;

const APP_BASIC: &str = r#"import React from 'react';
import './App.css';

function App() {
  return (
    <div className="App">
      <h1>Welcome to My React App</h1>
    </div>
  );
}

export default App;
"#;

const APP_ROUTER: &str = r#"import React from 'react';
import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';
import './App.css';
import Home from './components/Home.js';
import About from './components/About.js';

function App() {
  return (
    <Router>
      <div className="App">
        <Routes>
          <Route path="/" element={<Home />} />
          <Route path="/about" element={<About />} />
        </Routes>
      </div>
    </Router>
  );
}

export default App;
"#;

const HOME_PAGE: &str = r#"import React from 'react';
import { Link } from 'react-router-dom';

function Home() {
  return (
    <div>
      <h1>Home Page</h1>
      <Link to="/about">Go to About</Link>
    </div>
  );
}

export default Home;
"#;

const ABOUT_PAGE: &str = r#"import React from 'react';
import { Link } from 'react-router-dom';

function About() {
  return (
    <div>
      <h1>About Page</h1>
      <Link to="/">Go to Home</Link>
    </div>
  );
}

export default About;
"#;
