// Page template.
// Wraps the rendered fragment in the fixed page shell. One substitution,
// no templating engine.

/// Inline stylesheet with dark/light mode via media-query preference.
const PAGE_STYLE: &str = r#"
        :root {
            --dark: rgb(29, 29, 29);
            --dark-hover: #292929;
            --light: #dbdbdb;
            --light-hover: #efefef;
        }

        * {
            padding: 0;
            border: none;
            font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            text-decoration: none;
            list-style: none;
        }

        body {
            margin: 5%;
        }

        .row {
            display: flex;
            justify-content: space-between;
        }

        @media (prefers-color-scheme: dark) {
            * {
                background: var(--dark);
                color: var(--light);
            }

            li:hover {
                background: var(--dark-hover);
            }

            li:hover > * {
                background: inherit;
            }
        }

        @media (prefers-color-scheme: light) {
            * {
                background: var(--light);
                color: var(--dark);
            }

            li:hover {
                background: var(--light-hover);
            }

            li:hover > * {
                background: inherit;
            }
        }

        li {
            padding: 5px;
        }
"#;

/// Embed the body in the full HTML document.
pub fn site_template(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="description" content="Personal website listing public repositories.">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>This is my website.</title>
    <style>{PAGE_STYLE}</style>
</head>
<body>
    {body}
</body>
</html>
"#
    )
}
