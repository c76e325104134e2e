//! Language-neutral shape of the site navigation.
//!
//! The tree is declared once. Every node carries a stable identifier used to
//! look up its label in a locale's translation table, and a locale-neutral
//! link. Localized configs are produced by [`crate::LocaleConfig`] from this
//! shape, so the locales cannot drift apart structurally.

/// A sidebar node before localization.
#[derive(Clone, Debug)]
pub(crate) enum ShapeNode {
    /// Terminal link.
    Leaf {
        id: &'static str,
        link: &'static str,
    },
    /// Labeled container.
    Group {
        id: &'static str,
        collapsed: Option<bool>,
        children: Vec<ShapeNode>,
    },
}

/// A top-level navigation link before localization.
#[derive(Clone, Debug)]
pub(crate) struct ShapeNav {
    pub id: &'static str,
    pub link: &'static str,
    /// Locale-neutral path prefix that marks this item active.
    pub active_prefix: Option<&'static str>,
}

/// A sidebar tree registered under a path prefix.
#[derive(Clone, Debug)]
pub(crate) struct ShapeSidebar {
    pub prefix: &'static str,
    pub items: Vec<ShapeNode>,
}

/// Complete site navigation shape.
#[derive(Clone, Debug)]
pub(crate) struct SiteShape {
    pub nav: Vec<ShapeNav>,
    pub sidebars: Vec<ShapeSidebar>,
}

impl SiteShape {
    /// Every node identifier in declaration order.
    pub(crate) fn ids(&self) -> Vec<&'static str> {
        fn collect(nodes: &[ShapeNode], out: &mut Vec<&'static str>) {
            for node in nodes {
                match node {
                    ShapeNode::Leaf { id, .. } => out.push(*id),
                    ShapeNode::Group { id, children, .. } => {
                        out.push(*id);
                        collect(children, out);
                    }
                }
            }
        }

        let mut ids: Vec<&'static str> = self.nav.iter().map(|n| n.id).collect();
        for sidebar in &self.sidebars {
            collect(&sidebar.items, &mut ids);
        }
        ids
    }
}

fn leaf(id: &'static str, link: &'static str) -> ShapeNode {
    ShapeNode::Leaf { id, link }
}

fn group(id: &'static str, children: Vec<ShapeNode>) -> ShapeNode {
    ShapeNode::Group {
        id,
        collapsed: None,
        children,
    }
}

fn collapsible(id: &'static str, collapsed: bool, children: Vec<ShapeNode>) -> ShapeNode {
    ShapeNode::Group {
        id,
        collapsed: Some(collapsed),
        children,
    }
}

/// The Servactory documentation site.
pub(crate) fn site_shape() -> SiteShape {
    SiteShape {
        nav: vec![
            ShapeNav {
                id: "nav.guide",
                link: "/guide/getting-started",
                active_prefix: Some("/guide/"),
            },
            ShapeNav {
                id: "nav.releases",
                link: "/releases/2.6",
                active_prefix: Some("/releases/"),
            },
            ShapeNav {
                id: "nav.changelog",
                link: "https://github.com/servactory/servactory/releases",
                active_prefix: None,
            },
        ],
        sidebars: vec![
            ShapeSidebar {
                prefix: "/guide/",
                items: vec![
                    group(
                        "intro",
                        vec![
                            leaf("intro.getting_started", "/guide/getting-started"),
                            leaf("intro.why", "/guide/why"),
                            leaf("intro.conventions", "/guide/conventions"),
                        ],
                    ),
                    group(
                        "guide",
                        vec![
                            group(
                                "guide.usage",
                                vec![
                                    leaf("guide.usage.call", "/guide/usage/call"),
                                    leaf("guide.usage.info", "/guide/usage/info"),
                                ],
                            ),
                            group(
                                "guide.attributes",
                                vec![
                                    leaf("guide.attributes.input", "/guide/attributes/input"),
                                    leaf("guide.attributes.internal", "/guide/attributes/internal"),
                                    leaf("guide.attributes.output", "/guide/attributes/output"),
                                ],
                            ),
                            collapsible(
                                "guide.options",
                                true,
                                vec![
                                    leaf("guide.options.advanced", "/guide/options/advanced"),
                                    leaf("guide.options.dynamic", "/guide/options/dynamic"),
                                ],
                            ),
                            group(
                                "guide.actions",
                                vec![
                                    leaf("guide.actions.usage", "/guide/actions/usage"),
                                    leaf("guide.actions.options", "/guide/actions/options"),
                                    leaf("guide.actions.grouping", "/guide/actions/grouping"),
                                ],
                            ),
                            group(
                                "guide.exceptions",
                                vec![
                                    leaf("guide.exceptions.success", "/guide/exceptions/success"),
                                    leaf("guide.exceptions.failure", "/guide/exceptions/failure"),
                                ],
                            ),
                            leaf("guide.configuration", "/guide/configuration"),
                            leaf("guide.extensions", "/guide/extensions"),
                            leaf("guide.i18n", "/guide/i18n"),
                        ],
                    ),
                    group(
                        "testing",
                        vec![leaf("testing.rspec", "/guide/testing/rspec")],
                    ),
                ],
            },
            ShapeSidebar {
                prefix: "/releases/",
                items: vec![collapsible(
                    "releases",
                    false,
                    vec![
                        leaf("releases.2_6", "/releases/2.6"),
                        leaf("releases.2_5", "/releases/2.5"),
                        leaf("releases.2_4", "/releases/2.4"),
                        leaf("releases.2_3", "/releases/2.3"),
                    ],
                )],
            },
        ],
    }
}
