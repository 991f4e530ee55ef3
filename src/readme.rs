//! README document assembly.
//!
//! One markdown document with a fixed section order: title, description,
//! optional Live Demo, features, tech stack, getting started, usage,
//! contributing, license, author, acknowledgments. The only variable parts
//! are the project name, the description, the demo link, the clone URL, and
//! which tech-stack list is used.

use crate::form::FormState;

/// Description paragraph when the form left it empty.
const FALLBACK_DESCRIPTION: &str = "A modern web application built with cutting-edge technologies.";

/// Clone URL when no repository URL was given.
const PLACEHOLDER_CLONE_URL: &str = "https://github.com/username/repo";

/// Tech-stack entries when auto-detection is on. Fixed list — the toggle
/// never inspects the repository.
const DETECTED_STACK: [&str; 5] = ["React", "JavaScript", "CSS3", "HTML5", "Node.js"];

/// The single generic entry used when auto-detection is off.
const GENERIC_STACK: [&str; 1] = ["Web Technologies"];

/// Tech-stack entries for a form, as markdown bullet lines.
fn tech_stack_lines(form: &FormState) -> String {
    let stack: &[&str] = if form.auto_detect_tech {
        &DETECTED_STACK
    } else {
        &GENERIC_STACK
    };
    stack
        .iter()
        .map(|tech| format!("- {tech}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the README document.
pub fn build_readme(form: &FormState) -> String {
    let name = form.project_name();
    let description = form.description_or(FALLBACK_DESCRIPTION);
    let tech_stack = tech_stack_lines(form);
    let slug = form.slug();

    let clone_url = if form.repo_url.is_empty() {
        PLACEHOLDER_CLONE_URL
    } else {
        &form.repo_url
    };

    // Carries its own trailing blank line so the omitted case leaves no gap.
    let demo_section = if form.demo_url.is_empty() {
        String::new()
    } else {
        format!("## 🌐 Live Demo\n\n[View Live Demo]({})\n\n", form.demo_url)
    };

    format!(
        r#"# {name}

{description}

{demo_section}## ✨ Features

- 🚀 Fast and responsive user interface
- 💡 Intuitive user experience design
- 🔧 Modern development practices
- 📱 Mobile-first responsive design
- ⚡ Optimized performance
- 🛡️ Secure and reliable

## 🛠️ Tech Stack

{tech_stack}

## 🚀 Getting Started

### Prerequisites

- Node.js (v14 or higher)
- npm or yarn

### Installation

1. Clone the repository
```bash
git clone {clone_url}
cd {slug}
```

2. Install dependencies
```bash
npm install
```

3. Start the development server
```bash
npm start
```

4. Open [http://localhost:3000](http://localhost:3000) to view it in your browser.

## 📝 Usage

1. Navigate to the application
2. Explore the features and functionality
3. Customize as needed for your use case

## 🤝 Contributing

Contributions are welcome! Please feel free to submit a Pull Request.

1. Fork the project
2. Create your feature branch (`git checkout -b feature/AmazingFeature`)
3. Commit your changes (`git commit -m 'Add some AmazingFeature'`)
4. Push to the branch (`git push origin feature/AmazingFeature`)
5. Open a Pull Request

## 📄 License

This project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details.

## 👤 Author

Built with ❤️ by a passionate developer

## 🙏 Acknowledgments

- Thanks to all contributors
- Inspired by the amazing open source community
- Built with modern web technologies
"#
    )
}
