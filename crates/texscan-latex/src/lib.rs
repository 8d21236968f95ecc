//! # Texscan LaTeX: command directives for LaTeX documents.
//!
//! This crate contains the command directory used when lexing LaTeX documents with
//!     [texscan]: for several hundred control sequences from the LaTeX kernel and popular
//!     packages, a [SymbolClass] telling the grammar how to parse the command's arguments,
//!     and for some of them the classification edits the command makes.
//!
//! ```
//! let scanner_config = texscan_latex::config();
//! let mut scanner = texscan::Scanner::with_config(scanner_config);
//! assert_eq!(
//!     scanner.apply_control_sequence("makeatletter"),
//!     Some(texscan::directive::SymbolClass::GENERIC),
//! );
//! assert_eq!(
//!     scanner.table().classify('@' as u32),
//!     texscan::catcode::Category::Letter,
//! );
//! ```
use std::sync::{Arc, OnceLock};
use texscan::catcode::Category;
use texscan::directive::{
    CommandDirectory, Config, Directive, SymbolClass, AT_LETTER, AT_OTHER, EXPL_OFF, EXPL_ON,
    LUADIRECT, LUAEXEC,
};
use texscan::table::Interval;

/// Symbol classes of the commands in the directory.
///
/// Commands in the same class take their arguments the same way.
/// Commands that need no special treatment have the class [SymbolClass::GENERIC].
pub mod class {
    use texscan::directive::SymbolClass;

    pub const AT: SymbolClass = SymbolClass::new("At");
    pub const AT_IFPACKAGELATER: SymbolClass = SymbolClass::new("at_ifpackagelater");
    pub const AUTHOR: SymbolClass = SymbolClass::new("author");
    pub const BEGIN: SymbolClass = SymbolClass::new("begin");
    pub const BEGINGROUP: SymbolClass = SymbolClass::new("begingroup");
    pub const BGROUP: SymbolClass = SymbolClass::new("bgroup");
    pub const BIBITEM: SymbolClass = SymbolClass::new("bibitem");
    pub const CHECKCOMMAND: SymbolClass = SymbolClass::new("CheckCommand");
    pub const CITE: SymbolClass = SymbolClass::new("cite");
    pub const CITES: SymbolClass = SymbolClass::new("cites");
    pub const CLINE: SymbolClass = SymbolClass::new("cline");
    pub const CODE: SymbolClass = SymbolClass::new("code");
    pub const DATE: SymbolClass = SymbolClass::new("date");
    pub const DECLAREOPTION: SymbolClass = SymbolClass::new("DeclareOption");
    pub const DEF: SymbolClass = SymbolClass::new("def");
    pub const DELETESHORTVERB: SymbolClass = SymbolClass::new("DeleteShortVerb");
    pub const DISCRETIONARY: SymbolClass = SymbolClass::new("discretionary");
    pub const DISPLAY_MATH_BEGIN: SymbolClass = SymbolClass::new("display_math_begin");
    pub const DISPLAY_MATH_END: SymbolClass = SymbolClass::new("display_math_end");
    pub const DONOTINDEX: SymbolClass = SymbolClass::new("DoNotIndex");
    pub const EGROUP: SymbolClass = SymbolClass::new("egroup");
    pub const EMPH: SymbolClass = SymbolClass::new("emph");
    pub const END: SymbolClass = SymbolClass::new("end");
    pub const ENDGROUP: SymbolClass = SymbolClass::new("endgroup");
    pub const ENDINPUT: SymbolClass = SymbolClass::new("endinput");
    pub const ENLARGETHISPAGE: SymbolClass = SymbolClass::new("enlargethispage");
    pub const ENSUREMATH: SymbolClass = SymbolClass::new("ensuremath");
    pub const ERROR: SymbolClass = SymbolClass::new("Error");
    pub const EXECUTEOPTIONS: SymbolClass = SymbolClass::new("ExecuteOptions");
    pub const EXPANDAFTER: SymbolClass = SymbolClass::new("expandafter");
    pub const FOOTNOTE: SymbolClass = SymbolClass::new("footnote");
    pub const FOOTNOTEMARK: SymbolClass = SymbolClass::new("footnotemark");
    pub const FRAC: SymbolClass = SymbolClass::new("frac");
    pub const FREF: SymbolClass = SymbolClass::new("fref");
    pub const GLS_ACR: SymbolClass = SymbolClass::new("gls_acr");
    pub const GLSDISP: SymbolClass = SymbolClass::new("glsdisp");
    pub const GLSENTRY: SymbolClass = SymbolClass::new("glsentry");
    pub const GLSSEE: SymbolClass = SymbolClass::new("glssee");
    pub const HREF: SymbolClass = SymbolClass::new("href");
    pub const HYPERBASEURL: SymbolClass = SymbolClass::new("hyperbaseurl");
    pub const HYPERIMAGE: SymbolClass = SymbolClass::new("hyperimage");
    pub const HYPERREF: SymbolClass = SymbolClass::new("hyperref");
    pub const HYPHENATION: SymbolClass = SymbolClass::new("hyphenation");
    pub const IFFILEEXISTS: SymbolClass = SymbolClass::new("IfFileExists");
    pub const INLINE_MATH_BEGIN: SymbolClass = SymbolClass::new("inline_math_begin");
    pub const INLINE_MATH_END: SymbolClass = SymbolClass::new("inline_math_end");
    pub const INPUT: SymbolClass = SymbolClass::new("input");
    pub const ITEM: SymbolClass = SymbolClass::new("item");
    pub const LABEL: SymbolClass = SymbolClass::new("label");
    pub const LEFT: SymbolClass = SymbolClass::new("left");
    pub const LET: SymbolClass = SymbolClass::new("let");
    pub const LINEBREAK: SymbolClass = SymbolClass::new("linebreak");
    pub const LONGNEWGLOSSARYENTRY: SymbolClass = SymbolClass::new("longnewglossaryentry");
    pub const LSTINLINE: SymbolClass = SymbolClass::new("lstinline");
    pub const LUA: SymbolClass = SymbolClass::new("lua");
    pub const LUACODE: SymbolClass = SymbolClass::new("luacode");
    pub const MAKEBOX: SymbolClass = SymbolClass::new("makebox");
    pub const MAKESHORTVERB: SymbolClass = SymbolClass::new("MakeShortVerb");
    pub const MARGINPAR: SymbolClass = SymbolClass::new("marginpar");
    pub const MATHACCENT: SymbolClass = SymbolClass::new("mathaccent");
    pub const MATHSTYLE: SymbolClass = SymbolClass::new("mathstyle");
    pub const MBOX: SymbolClass = SymbolClass::new("mbox");
    pub const MINT: SymbolClass = SymbolClass::new("mint");
    pub const MINTINLINE: SymbolClass = SymbolClass::new("mintinline");
    pub const MULTICOLUMN: SymbolClass = SymbolClass::new("multicolumn");
    pub const NEEDSTEXFORMAT: SymbolClass = SymbolClass::new("NeedsTeXFormat");
    pub const NEWACRONYM: SymbolClass = SymbolClass::new("newacronym");
    pub const NEWCOMMAND: SymbolClass = SymbolClass::new("newcommand");
    pub const NEWCOUNTER: SymbolClass = SymbolClass::new("newcounter");
    pub const NEWENVIRONMENT: SymbolClass = SymbolClass::new("newenvironment");
    pub const NEWFONT: SymbolClass = SymbolClass::new("newfont");
    pub const NEWGLOSSARYENTRY: SymbolClass = SymbolClass::new("newglossaryentry");
    pub const NEWLENGTH: SymbolClass = SymbolClass::new("newlength");
    pub const NEWLINE: SymbolClass = SymbolClass::new("newline");
    pub const NEWSAVEBOX: SymbolClass = SymbolClass::new("newsavebox");
    pub const NEWTHEOREM: SymbolClass = SymbolClass::new("newtheorem");
    pub const NOCITE: SymbolClass = SymbolClass::new("nocite");
    pub const OBEYCR: SymbolClass = SymbolClass::new("obeycr");
    pub const PAGEBREAK: SymbolClass = SymbolClass::new("pagebreak");
    pub const PAR: SymbolClass = SymbolClass::new("par");
    pub const PARBOX: SymbolClass = SymbolClass::new("parbox");
    pub const PASSOPTIONSTO: SymbolClass = SymbolClass::new("PassOptionsTo");
    pub const PROCESSOPTIONS: SymbolClass = SymbolClass::new("ProcessOptions");
    pub const PROVIDES: SymbolClass = SymbolClass::new("Provides");
    pub const REF: SymbolClass = SymbolClass::new("ref");
    pub const REFRANGE: SymbolClass = SymbolClass::new("refrange");
    pub const REGEXP: SymbolClass = SymbolClass::new("regexp");
    pub const RELAX: SymbolClass = SymbolClass::new("relax");
    pub const RIGHT: SymbolClass = SymbolClass::new("right");
    pub const SECTION: SymbolClass = SymbolClass::new("section");
    pub const SETLENGTH: SymbolClass = SymbolClass::new("setlength");
    pub const SQRT: SymbolClass = SymbolClass::new("sqrt");
    pub const STACKREL: SymbolClass = SymbolClass::new("stackrel");
    pub const STRING: SymbolClass = SymbolClass::new("string");
    pub const TAG: SymbolClass = SymbolClass::new("tag");
    pub const TEXT: SymbolClass = SymbolClass::new("text");
    pub const TEXTSTYLE: SymbolClass = SymbolClass::new("textstyle");
    pub const THANKS: SymbolClass = SymbolClass::new("thanks");
    pub const TITLE: SymbolClass = SymbolClass::new("title");
    pub const URL: SymbolClass = SymbolClass::new("url");
    pub const USE: SymbolClass = SymbolClass::new("use");
    pub const USE_209: SymbolClass = SymbolClass::new("use_209");
    pub const VERB: SymbolClass = SymbolClass::new("verb");
    pub const VOLCITE: SymbolClass = SymbolClass::new("volcite");
    pub const VOLCITES: SymbolClass = SymbolClass::new("volcites");
    pub const WARNINGINFO: SymbolClass = SymbolClass::new("WarningInfo");}

/// All commands in the directory, grouped by the package that defines them.
pub static COMMANDS: &[(&str, Directive)] = &[
    // initex
    ("begingroup", Directive::plain(class::BEGINGROUP)),
    ("bgroup", Directive::plain(class::BGROUP)),
    ("catcode", Directive::plain(class::CODE)),
    ("def", Directive::plain(class::DEF)),
    ("delcode", Directive::plain(class::CODE)),
    ("edef", Directive::plain(class::DEF)),
    ("egroup", Directive::plain(class::EGROUP)),
    ("endgroup", Directive::plain(class::ENDGROUP)),
    ("expandafter", Directive::plain(class::EXPANDAFTER)),
    ("gdef", Directive::plain(class::DEF)),
    ("input", Directive::plain(class::INPUT)),
    ("kcatcode", Directive::plain(class::CODE)),
    ("lccode", Directive::plain(class::CODE)),
    ("left", Directive::plain(class::LEFT)),
    ("let", Directive::plain(class::LET)),
    ("mathcode", Directive::plain(class::CODE)),
    ("par", Directive::plain(class::PAR)),
    ("right", Directive::plain(class::RIGHT)),
    ("sfcode", Directive::plain(class::CODE)),
    ("string", Directive::plain(class::STRING)),
    ("uccode", Directive::plain(class::CODE)),
    ("xdef", Directive::plain(class::DEF)),
    // amsmath
    ("eqref", Directive::plain(class::REF)),
    ("tag", Directive::plain(class::TAG)),
    ("text", Directive::plain(class::TEXT)),
    // doc
    ("DoNotIndex", Directive::plain(class::DONOTINDEX)),
    // latex
    ("@ifpackagelater", Directive::plain(class::AT_IFPACKAGELATER)),
    ("(", Directive::plain(class::INLINE_MATH_BEGIN)),
    (")", Directive::plain(class::INLINE_MATH_END)),
    ("[", Directive::plain(class::DISPLAY_MATH_BEGIN)),
    ("]", Directive::plain(class::DISPLAY_MATH_END)),
    ("acute", Directive::plain(class::MATHACCENT)),
    ("AtBeginDocument", Directive::plain(class::AT)),
    ("AtBeginDvi", Directive::plain(class::AT)),
    ("AtEndDocument", Directive::plain(class::AT)),
    ("AtEndOfClass", Directive::plain(class::AT)),
    ("AtEndOfPackage", Directive::plain(class::AT)),
    ("author", Directive::plain(class::AUTHOR)),
    ("bar", Directive::plain(class::MATHACCENT)),
    ("begin", Directive::plain(class::BEGIN)),
    ("bibitem", Directive::plain(class::BIBITEM)),
    ("breve", Directive::plain(class::MATHACCENT)),
    ("chapter", Directive::plain(class::SECTION)),
    ("check", Directive::plain(class::MATHACCENT)),
    ("CheckCommand", Directive::plain(class::CHECKCOMMAND)),
    ("ClassError", Directive::plain(class::ERROR)),
    ("ClassInfo", Directive::plain(class::WARNINGINFO)),
    ("ClassInfoNoLine", Directive::plain(class::WARNINGINFO)),
    ("ClassWarning", Directive::plain(class::WARNINGINFO)),
    ("ClassWarningNoLine", Directive::plain(class::WARNINGINFO)),
    ("cline", Directive::plain(class::CLINE)),
    ("date", Directive::plain(class::DATE)),
    ("ddot", Directive::plain(class::MATHACCENT)),
    ("DeclareOption", Directive::plain(class::DECLAREOPTION)),
    ("DeclareRobustCommand", Directive::plain(class::NEWCOMMAND)),
    ("discretionary", Directive::plain(class::DISCRETIONARY)),
    ("documentclass", Directive::plain(class::USE)),
    ("documentstyle", Directive::plain(class::USE_209)),
    ("dot", Directive::plain(class::MATHACCENT)),
    ("emph", Directive::plain(class::EMPH)),
    ("end", Directive::plain(class::END)),
    ("endinput", Directive::plain(class::ENDINPUT)),
    ("enlargethispage", Directive::plain(class::ENLARGETHISPAGE)),
    ("ensuremath", Directive::plain(class::ENSUREMATH)),
    ("ExecuteOptions", Directive::plain(class::EXECUTEOPTIONS)),
    ("fbox", Directive::plain(class::MBOX)),
    ("footnote", Directive::plain(class::FOOTNOTE)),
    ("footnotemark", Directive::plain(class::FOOTNOTEMARK)),
    ("footnotetext", Directive::plain(class::FOOTNOTE)),
    ("frac", Directive::plain(class::FRAC)),
    ("framebox", Directive::plain(class::MAKEBOX)),
    ("grave", Directive::plain(class::MATHACCENT)),
    ("hat", Directive::plain(class::MATHACCENT)),
    ("hyphenation", Directive::plain(class::HYPHENATION)),
    ("IfFileExists", Directive::plain(class::IFFILEEXISTS)),
    ("include", Directive::plain(class::INPUT)),
    ("InputIfFileExists", Directive::plain(class::IFFILEEXISTS)),
    ("item", Directive::plain(class::ITEM)),
    ("label", Directive::plain(class::LABEL)),
    ("linebreak", Directive::plain(class::LINEBREAK)),
    ("LoadClass", Directive::plain(class::USE)),
    ("LoadClassWithOptions", Directive::plain(class::USE)),
    ("makeatletter", Directive::local(SymbolClass::GENERIC, AT_LETTER)),
    ("makeatother", Directive::local(SymbolClass::GENERIC, AT_OTHER)),
    ("makebox", Directive::plain(class::MAKEBOX)),
    ("marginpar", Directive::plain(class::MARGINPAR)),
    ("mathbf", Directive::plain(class::MATHSTYLE)),
    ("mathcal", Directive::plain(class::MATHSTYLE)),
    ("mathit", Directive::plain(class::MATHSTYLE)),
    ("mathnormal", Directive::plain(class::MATHSTYLE)),
    ("mathring", Directive::plain(class::MATHACCENT)),
    ("mathrm", Directive::plain(class::MATHSTYLE)),
    ("mathsf", Directive::plain(class::MATHSTYLE)),
    ("mathtt", Directive::plain(class::MATHSTYLE)),
    ("mbox", Directive::plain(class::MBOX)),
    ("mit", Directive::plain(class::MATHSTYLE)),
    ("multicolumn", Directive::plain(class::MULTICOLUMN)),
    ("NeedsTeXFormat", Directive::plain(class::NEEDSTEXFORMAT)),
    ("newcommand", Directive::plain(class::NEWCOMMAND)),
    ("newcounter", Directive::plain(class::NEWCOUNTER)),
    ("newenvironment", Directive::plain(class::NEWENVIRONMENT)),
    ("newfont", Directive::plain(class::NEWFONT)),
    ("newlength", Directive::plain(class::NEWLENGTH)),
    ("newline", Directive::plain(class::NEWLINE)),
    ("newsavebox", Directive::plain(class::NEWSAVEBOX)),
    ("newtheorem", Directive::plain(class::NEWTHEOREM)),
    ("nolinebreak", Directive::plain(class::LINEBREAK)),
    ("nopagebreak", Directive::plain(class::PAGEBREAK)),
    ("obeycr", Directive::local(class::OBEYCR, OBEYCR_EDITS)),
    ("PackageError", Directive::plain(class::ERROR)),
    ("PackageInfo", Directive::plain(class::WARNINGINFO)),
    ("PackageInfoNoLine", Directive::plain(class::WARNINGINFO)),
    ("PackageWarning", Directive::plain(class::WARNINGINFO)),
    ("PackageWarningNoLine", Directive::plain(class::WARNINGINFO)),
    ("pagebreak", Directive::plain(class::PAGEBREAK)),
    ("paragraph", Directive::plain(class::SECTION)),
    ("parbox", Directive::plain(class::PARBOX)),
    ("part", Directive::plain(class::SECTION)),
    ("PassOptionsToClass", Directive::plain(class::PASSOPTIONSTO)),
    ("PassOptionsToPackage", Directive::plain(class::PASSOPTIONSTO)),
    ("ProcessOptions", Directive::plain(class::PROCESSOPTIONS)),
    ("providecommand", Directive::plain(class::NEWCOMMAND)),
    ("ProvidesClass", Directive::local(class::PROVIDES, AT_LETTER)),
    ("ProvidesFile", Directive::local(class::PROVIDES, AT_LETTER)),
    ("ProvidesPackage", Directive::local(class::PROVIDES, AT_LETTER)),
    ("ref", Directive::plain(class::REF)),
    ("relax", Directive::plain(class::RELAX)),
    ("renewcommand", Directive::plain(class::NEWCOMMAND)),
    ("renewenvironment", Directive::plain(class::NEWENVIRONMENT)),
    ("RequirePackage", Directive::plain(class::USE)),
    ("RequirePackageWithOptions", Directive::plain(class::USE)),
    ("restorecr", Directive::local(class::OBEYCR, RESTORECR_EDITS)),
    ("section", Directive::plain(class::SECTION)),
    ("setlength", Directive::plain(class::SETLENGTH)),
    ("sqrt", Directive::plain(class::SQRT)),
    ("stackrel", Directive::plain(class::STACKREL)),
    ("subparagraph", Directive::plain(class::SECTION)),
    ("subsection", Directive::plain(class::SECTION)),
    ("subsubsection", Directive::plain(class::SECTION)),
    ("textbf", Directive::plain(class::TEXTSTYLE)),
    ("textit", Directive::plain(class::TEXTSTYLE)),
    ("textmd", Directive::plain(class::TEXTSTYLE)),
    ("textnormal", Directive::plain(class::TEXTSTYLE)),
    ("textrm", Directive::plain(class::TEXTSTYLE)),
    ("textsc", Directive::plain(class::TEXTSTYLE)),
    ("textsf", Directive::plain(class::TEXTSTYLE)),
    ("textsl", Directive::plain(class::TEXTSTYLE)),
    ("texttt", Directive::plain(class::TEXTSTYLE)),
    ("textup", Directive::plain(class::TEXTSTYLE)),
    ("thanks", Directive::plain(class::THANKS)),
    ("tilde", Directive::plain(class::MATHACCENT)),
    ("title", Directive::plain(class::TITLE)),
    ("usepackage", Directive::plain(class::USE)),
    ("vec", Directive::plain(class::MATHACCENT)),
    ("verb", Directive::plain(class::VERB)),
    ("widehat", Directive::plain(class::MATHACCENT)),
    ("widetilde", Directive::plain(class::MATHACCENT)),
    // shortvrb
    ("DeleteShortVerb", Directive::plain(class::DELETESHORTVERB)),
    ("MakeShortVerb", Directive::plain(class::MAKESHORTVERB)),
    // biblatex
    ("autocite", Directive::plain(class::CITE)),
    ("Autocite", Directive::plain(class::CITE)),
    ("autocites", Directive::plain(class::CITES)),
    ("Autocites", Directive::plain(class::CITES)),
    ("avolcite", Directive::plain(class::VOLCITE)),
    ("Avolcite", Directive::plain(class::VOLCITE)),
    ("avolcites", Directive::plain(class::VOLCITES)),
    ("Avolcites", Directive::plain(class::VOLCITES)),
    ("cite", Directive::plain(class::CITE)),
    ("Cite", Directive::plain(class::CITE)),
    ("citeauthor", Directive::plain(class::CITE)),
    ("Citeauthor", Directive::plain(class::CITE)),
    ("citedate", Directive::plain(class::CITE)),
    ("cites", Directive::plain(class::CITES)),
    ("Cites", Directive::plain(class::CITES)),
    ("citetitle", Directive::plain(class::CITE)),
    ("citeurl", Directive::plain(class::CITE)),
    ("citeyear", Directive::plain(class::CITE)),
    ("Citeyear", Directive::plain(class::CITE)),
    ("fnotecite", Directive::plain(class::CITE)),
    ("footcite", Directive::plain(class::CITE)),
    ("footcites", Directive::plain(class::CITES)),
    ("footcitetext", Directive::plain(class::CITE)),
    ("footcitetexts", Directive::plain(class::CITES)),
    ("footfullcite", Directive::plain(class::CITE)),
    ("fref", Directive::plain(class::FREF)),
    ("Fref", Directive::plain(class::FREF)),
    ("ftvolcite", Directive::plain(class::VOLCITE)),
    ("Ftvolcite", Directive::plain(class::VOLCITE)),
    ("ftvolcites", Directive::plain(class::VOLCITES)),
    ("Ftvolcites", Directive::plain(class::VOLCITES)),
    ("fullcite", Directive::plain(class::CITE)),
    ("fvolcite", Directive::plain(class::VOLCITE)),
    ("Fvolcite", Directive::plain(class::VOLCITE)),
    ("fvolcites", Directive::plain(class::VOLCITES)),
    ("Fvolcites", Directive::plain(class::VOLCITES)),
    ("nocite", Directive::plain(class::NOCITE)),
    ("nolinkurl", Directive::plain(class::URL)),
    ("notecite", Directive::plain(class::CITE)),
    ("Notecite", Directive::plain(class::CITE)),
    ("nptextcite", Directive::plain(class::CITE)),
    ("pageref", Directive::plain(class::REF)),
    ("parencite", Directive::plain(class::CITE)),
    ("Parencite", Directive::plain(class::CITE)),
    ("parencites", Directive::plain(class::CITES)),
    ("Parencites", Directive::plain(class::CITES)),
    ("pnotecite", Directive::plain(class::CITE)),
    ("Pnotecite", Directive::plain(class::CITE)),
    ("pvolcite", Directive::plain(class::VOLCITE)),
    ("Pvolcite", Directive::plain(class::VOLCITE)),
    ("pvolcites", Directive::plain(class::VOLCITES)),
    ("Pvolcites", Directive::plain(class::VOLCITES)),
    ("regexp", Directive::plain(class::REGEXP)),
    ("svolcite", Directive::plain(class::VOLCITE)),
    ("Svolcite", Directive::plain(class::VOLCITE)),
    ("svolcites", Directive::plain(class::VOLCITES)),
    ("Svolcites", Directive::plain(class::VOLCITES)),
    ("tvolcite", Directive::plain(class::VOLCITE)),
    ("Tvolcite", Directive::plain(class::VOLCITE)),
    ("tvolcites", Directive::plain(class::VOLCITES)),
    ("Tvolcites", Directive::plain(class::VOLCITES)),
    ("smartcite", Directive::plain(class::CITE)),
    ("Smartcite", Directive::plain(class::CITE)),
    ("smartcites", Directive::plain(class::CITES)),
    ("Smartcites", Directive::plain(class::CITES)),
    ("shortcite", Directive::plain(class::CITE)),
    ("volcite", Directive::plain(class::VOLCITE)),
    ("Volcite", Directive::plain(class::VOLCITE)),
    ("volcites", Directive::plain(class::VOLCITES)),
    ("Volcites", Directive::plain(class::VOLCITES)),
    ("supercite", Directive::plain(class::CITE)),
    ("supercites", Directive::plain(class::CITES)),
    // biblatex-chicago
    ("citejournal", Directive::plain(class::CITE)),
    ("Citetitle", Directive::plain(class::CITE)),
    ("citetitles", Directive::plain(class::CITES)),
    ("gentextcite", Directive::plain(class::CITE)),
    ("Gentextcite", Directive::plain(class::CITE)),
    ("gentextcites", Directive::plain(class::CITES)),
    ("Gentextcites", Directive::plain(class::CITES)),
    ("headlesscite", Directive::plain(class::CITE)),
    ("headlesscites", Directive::plain(class::CITES)),
    ("headlessfullcite", Directive::plain(class::CITE)),
    ("shorthandcite", Directive::plain(class::CITE)),
    ("surnamecite", Directive::plain(class::CITE)),
    ("surnamecites", Directive::plain(class::CITES)),
    ("textcite", Directive::plain(class::CITE)),
    ("Textcite", Directive::plain(class::CITE)),
    ("textcites", Directive::plain(class::CITES)),
    ("Textcites", Directive::plain(class::CITES)),
    // cleveref
    ("cpageref", Directive::plain(class::REF)),
    ("Cpageref", Directive::plain(class::REF)),
    ("cpagerefrange", Directive::plain(class::REFRANGE)),
    ("Cpagerefrange", Directive::plain(class::REFRANGE)),
    ("cref", Directive::plain(class::REF)),
    ("Cref", Directive::plain(class::REF)),
    ("crefrange", Directive::plain(class::REFRANGE)),
    ("Crefrange", Directive::plain(class::REFRANGE)),
    ("labelcref", Directive::plain(class::REF)),
    ("labelcpageref", Directive::plain(class::REF)),
    ("lcnamecref", Directive::plain(class::REF)),
    ("lcnamecrefs", Directive::plain(class::REF)),
    ("namecref", Directive::plain(class::REF)),
    ("nameCref", Directive::plain(class::REF)),
    ("namecrefs", Directive::plain(class::REF)),
    ("nameCrefs", Directive::plain(class::REF)),
    // fancyvrb
    ("DefineShortVerb", Directive::plain(class::MAKESHORTVERB)),
    ("UndefineShortVerb", Directive::plain(class::DELETESHORTVERB)),
    // glossaries
    ("ac", Directive::plain(class::GLS_ACR)),
    ("glsentryname", Directive::plain(class::GLSENTRY)),
    ("Glsentryname", Directive::plain(class::GLSENTRY)),
    ("glossentryname", Directive::plain(class::GLSENTRY)),
    ("Glossentryname", Directive::plain(class::GLSENTRY)),
    ("glsentrytext", Directive::plain(class::GLSENTRY)),
    ("Glsentrytext", Directive::plain(class::GLSENTRY)),
    ("glsentryplural", Directive::plain(class::GLSENTRY)),
    ("Glsentryplural", Directive::plain(class::GLSENTRY)),
    ("glsentryfirst", Directive::plain(class::GLSENTRY)),
    ("Glsentryfirst", Directive::plain(class::GLSENTRY)),
    ("glsentryfirstplural", Directive::plain(class::GLSENTRY)),
    ("Glsentryfirstplural", Directive::plain(class::GLSENTRY)),
    ("glsentrydesc", Directive::plain(class::GLSENTRY)),
    ("Glsentrydesc", Directive::plain(class::GLSENTRY)),
    ("glossentrydesc", Directive::plain(class::GLSENTRY)),
    ("Glossentrydesc", Directive::plain(class::GLSENTRY)),
    ("glsentrydescplural", Directive::plain(class::GLSENTRY)),
    ("Glsentrydescplural", Directive::plain(class::GLSENTRY)),
    ("glsentrysymbol", Directive::plain(class::GLSENTRY)),
    ("Glsentrysymbol", Directive::plain(class::GLSENTRY)),
    ("glsentryfield", Directive::plain(class::GLSENTRY)),
    ("Glsentryfield", Directive::plain(class::GLSENTRY)),
    ("glossentrysymbol", Directive::plain(class::GLSENTRY)),
    ("Glossentrysymbol", Directive::plain(class::GLSENTRY)),
    ("glsentrysymbolplural", Directive::plain(class::GLSENTRY)),
    ("Glsentrysymbolplural", Directive::plain(class::GLSENTRY)),
    ("glsentryuseri", Directive::plain(class::GLSENTRY)),
    ("Glsentryuseri", Directive::plain(class::GLSENTRY)),
    ("glsentryuserii", Directive::plain(class::GLSENTRY)),
    ("Glsentryuserii", Directive::plain(class::GLSENTRY)),
    ("glsentryuseriii", Directive::plain(class::GLSENTRY)),
    ("Glsentryuseriii", Directive::plain(class::GLSENTRY)),
    ("glsentryuseriv", Directive::plain(class::GLSENTRY)),
    ("Glsentryuseriv", Directive::plain(class::GLSENTRY)),
    ("glsentryuserv", Directive::plain(class::GLSENTRY)),
    ("Glsentryuserv", Directive::plain(class::GLSENTRY)),
    ("glsentryuservi", Directive::plain(class::GLSENTRY)),
    ("Glsentryuservi", Directive::plain(class::GLSENTRY)),
    ("glsentrynumberlist", Directive::plain(class::GLSENTRY)),
    ("Glsentrynumberlist", Directive::plain(class::GLSENTRY)),
    ("Ac", Directive::plain(class::GLS_ACR)),
    ("acf", Directive::plain(class::GLS_ACR)),
    ("Acf", Directive::plain(class::GLS_ACR)),
    ("acfp", Directive::plain(class::GLS_ACR)),
    ("Acfp", Directive::plain(class::GLS_ACR)),
    ("acl", Directive::plain(class::GLS_ACR)),
    ("Acl", Directive::plain(class::GLS_ACR)),
    ("aclp", Directive::plain(class::GLS_ACR)),
    ("Aclp", Directive::plain(class::GLS_ACR)),
    ("acp", Directive::plain(class::GLS_ACR)),
    ("Acp", Directive::plain(class::GLS_ACR)),
    ("acrfull", Directive::plain(class::GLS_ACR)),
    ("Acrfull", Directive::plain(class::GLS_ACR)),
    ("ACRfull", Directive::plain(class::GLS_ACR)),
    ("acrfullfmt", Directive::plain(class::GLS_ACR)),
    ("acrfullformat", Directive::plain(class::GLS_ACR)),
    ("acrfullpl", Directive::plain(class::GLS_ACR)),
    ("Acrfullpl", Directive::plain(class::GLS_ACR)),
    ("ACRfullpl", Directive::plain(class::GLS_ACR)),
    ("acrlong", Directive::plain(class::GLS_ACR)),
    ("Acrlong", Directive::plain(class::GLS_ACR)),
    ("ACRlong", Directive::plain(class::GLS_ACR)),
    ("acrlongpl", Directive::plain(class::GLS_ACR)),
    ("Acrlongpl", Directive::plain(class::GLS_ACR)),
    ("ACRlongpl", Directive::plain(class::GLS_ACR)),
    ("acrshort", Directive::plain(class::GLS_ACR)),
    ("Acrshort", Directive::plain(class::GLS_ACR)),
    ("ACRshort", Directive::plain(class::GLS_ACR)),
    ("acrshortpl", Directive::plain(class::GLS_ACR)),
    ("Acrshortpl", Directive::plain(class::GLS_ACR)),
    ("ACRshortpl", Directive::plain(class::GLS_ACR)),
    ("acs", Directive::plain(class::GLS_ACR)),
    ("Acs", Directive::plain(class::GLS_ACR)),
    ("acsp", Directive::plain(class::GLS_ACR)),
    ("Acsp", Directive::plain(class::GLS_ACR)),
    ("gls", Directive::plain(class::GLS_ACR)),
    ("Gls", Directive::plain(class::GLS_ACR)),
    ("GLS", Directive::plain(class::GLS_ACR)),
    ("glsdesc", Directive::plain(class::GLS_ACR)),
    ("Glsdesc", Directive::plain(class::GLS_ACR)),
    ("GLSdesc", Directive::plain(class::GLS_ACR)),
    ("glsdisp", Directive::plain(class::GLSDISP)),
    ("glsfirst", Directive::plain(class::GLS_ACR)),
    ("Glsfirst", Directive::plain(class::GLS_ACR)),
    ("GLSfirst", Directive::plain(class::GLS_ACR)),
    ("glsfirstplural", Directive::plain(class::GLS_ACR)),
    ("Glsfirstplural", Directive::plain(class::GLS_ACR)),
    ("GLSfirstplural", Directive::plain(class::GLS_ACR)),
    ("glslink", Directive::plain(class::GLSDISP)),
    ("glsname", Directive::plain(class::GLS_ACR)),
    ("Glsname", Directive::plain(class::GLS_ACR)),
    ("GLSname", Directive::plain(class::GLS_ACR)),
    ("glspl", Directive::plain(class::GLS_ACR)),
    ("Glspl", Directive::plain(class::GLS_ACR)),
    ("GLSpl", Directive::plain(class::GLS_ACR)),
    ("glsplural", Directive::plain(class::GLS_ACR)),
    ("Glsplural", Directive::plain(class::GLS_ACR)),
    ("GLSplural", Directive::plain(class::GLS_ACR)),
    ("glssee", Directive::plain(class::GLSSEE)),
    ("glssymbol", Directive::plain(class::GLS_ACR)),
    ("Glssymbol", Directive::plain(class::GLS_ACR)),
    ("GLSsymbol", Directive::plain(class::GLS_ACR)),
    ("glstext", Directive::plain(class::GLS_ACR)),
    ("Glstext", Directive::plain(class::GLS_ACR)),
    ("GLStext", Directive::plain(class::GLS_ACR)),
    ("glsuseri", Directive::plain(class::GLS_ACR)),
    ("Glsuseri", Directive::plain(class::GLS_ACR)),
    ("GLSuseri", Directive::plain(class::GLS_ACR)),
    ("glsuserii", Directive::plain(class::GLS_ACR)),
    ("Glsuserii", Directive::plain(class::GLS_ACR)),
    ("GLSuserii", Directive::plain(class::GLS_ACR)),
    ("glsuseriii", Directive::plain(class::GLS_ACR)),
    ("Glsuseriii", Directive::plain(class::GLS_ACR)),
    ("GLSuseriii", Directive::plain(class::GLS_ACR)),
    ("glsuseriv", Directive::plain(class::GLS_ACR)),
    ("Glsuseriv", Directive::plain(class::GLS_ACR)),
    ("GLSuseriv", Directive::plain(class::GLS_ACR)),
    ("glsuserv", Directive::plain(class::GLS_ACR)),
    ("Glsuserv", Directive::plain(class::GLS_ACR)),
    ("GLSuserv", Directive::plain(class::GLS_ACR)),
    ("glsuservi", Directive::plain(class::GLS_ACR)),
    ("Glsuservi", Directive::plain(class::GLS_ACR)),
    ("GLSuservi", Directive::plain(class::GLS_ACR)),
    ("longnewglossaryentry", Directive::plain(class::LONGNEWGLOSSARYENTRY)),
    ("longprovideglossaryentry", Directive::plain(class::LONGNEWGLOSSARYENTRY)),
    ("newacronym", Directive::plain(class::NEWACRONYM)),
    ("newglossaryentry", Directive::plain(class::NEWGLOSSARYENTRY)),
    ("provideglossaryentry", Directive::plain(class::NEWGLOSSARYENTRY)),
    // hyperref
    ("autopageref", Directive::plain(class::REF)),
    ("autoref", Directive::plain(class::REF)),
    ("href", Directive::plain(class::HREF)),
    ("hyperbaseurl", Directive::plain(class::HYPERBASEURL)),
    ("hyperimage", Directive::plain(class::HYPERIMAGE)),
    ("hyperref", Directive::plain(class::HYPERREF)),
    ("nameref", Directive::plain(class::REF)),
    ("url", Directive::plain(class::URL)),
    // scr
    ("addchap", Directive::plain(class::SECTION)),
    ("addpart", Directive::plain(class::SECTION)),
    ("addsec", Directive::plain(class::SECTION)),
    // listings
    ("lstinline", Directive::plain(class::LSTINLINE)),
    // expl3
    ("ExplSyntaxOff", Directive::local(SymbolClass::GENERIC, EXPL_OFF)),
    ("ExplSyntaxOn", Directive::local(SymbolClass::GENERIC, EXPL_ON)),
    ("ProvidesExplClass", Directive::local(SymbolClass::GENERIC, EXPL_ON)),
    ("ProvidesExplFile", Directive::local(SymbolClass::GENERIC, EXPL_ON)),
    ("ProvidesExplPackage", Directive::local(SymbolClass::GENERIC, EXPL_ON)),
    // minted
    ("mint", Directive::plain(class::MINT)),
    ("mintinline", Directive::plain(class::MINTINLINE)),
    // varioref
    ("Ref", Directive::plain(class::REF)),
    ("vpageref", Directive::plain(class::REF)),
    ("vpagerefrange", Directive::plain(class::REFRANGE)),
    ("vref", Directive::plain(class::REF)),
    ("Vref", Directive::plain(class::REF)),
    ("vrefrange", Directive::plain(class::REFRANGE)),
    // luacode
    ("luadirect", Directive::local(class::LUACODE, LUADIRECT)),
    ("luaexec", Directive::local(class::LUACODE, LUAEXEC)),
    // luatexbase
    ("directlua", Directive::local(class::LUA, LUADIRECT)),
    ("latelua", Directive::local(class::LUA, LUADIRECT)),
];

const OBEYCR_EDITS: &[Interval] = &[
    Interval::single('\n', Category::Active),
];

const RESTORECR_EDITS: &[Interval] = &[
    Interval::single('\n', Category::EndOfLine),
];

/// Returns a new command directory containing [COMMANDS].
pub fn command_directory() -> CommandDirectory {
    COMMANDS
        .iter()
        .map(|(name, directive)| (*name, directive.clone()))
        .collect()
}

/// Returns the shared engine configuration for LaTeX documents.
///
/// This is the default [Config] with [command_directory] installed.
/// It is built once per process.
pub fn config() -> Arc<Config> {
    static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();
    CONFIG
        .get_or_init(|| Arc::new(Config::default().with_command_directory(command_directory())))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for (name, _) in COMMANDS {
            assert!(seen.insert(*name), "duplicate command {name}");
        }
        assert_eq!(command_directory().len(), COMMANDS.len());
    }

    #[test]
    fn names_do_not_include_the_escape() {
        for (name, _) in COMMANDS {
            assert!(!name.is_empty());
            assert!(!name.starts_with('\\'), "{name}");
        }
    }

    #[test]
    fn only_some_commands_edit_the_table() {
        let editing: Vec<&str> = COMMANDS
            .iter()
            .filter(|(_, directive)| directive.has_edits())
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(editing.len(), 16);
        assert!(editing.contains(&"ExplSyntaxOn"));
        assert!(editing.contains(&"obeycr"));
        assert!(!editing.contains(&"section"));
    }

    #[test]
    fn config_is_shared() {
        assert!(Arc::ptr_eq(&config(), &config()));
        assert_eq!(config().verbatim_environments().len(), 14);
        assert_eq!(
            config().commands().get("ref").map(|directive| directive.class),
            Some(class::REF)
        );
    }
}
