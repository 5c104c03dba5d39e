//! Element and attribute names of the Lattes curriculum export.

pub const IDENTIFIER: &str = "NUMERO-IDENTIFICADOR";
pub const GENERAL_DATA: &str = "DADOS-GERAIS";
pub const FULL_NAME: &str = "NOME-COMPLETO";
pub const YEAR: &str = "ANO";
pub const START_YEAR: &str = "ANO-INICIO";
pub const NATURE: &str = "NATUREZA";
pub const PAGE_COUNT: &str = "NUMERO-DE-PAGINAS";

// Education
pub const EDUCATION: &str = "FORMACAO-ACADEMICA-TITULACAO";
pub const POST_DOCTORATE: &str = "POS-DOUTORADO";
pub const HABILITATION: &str = "LIVRE-DOCENCIA";
pub const DOCTORATE: &str = "DOUTORADO";
pub const MASTERS: &str = "MESTRADO";
pub const COURSE_STATUS: &str = "STATUS-DO-CURSO";
pub const CONCLUDED: &str = "CONCLUIDO";

// Projects
pub const PROFESSIONAL_ROLES: &str = "ATUACOES-PROFISSIONAIS";
pub const PROFESSIONAL_ROLE: &str = "ATUACAO-PROFISSIONAL";
pub const PROJECT_ACTIVITIES: &str = "ATIVIDADES-DE-PARTICIPACAO-EM-PROJETO";
pub const PROJECT_PARTICIPATION: &str = "PARTICIPACAO-EM-PROJETO";
pub const RESEARCH_PROJECT: &str = "PROJETO-DE-PESQUISA";
pub const PROJECT_TEAM: &str = "EQUIPE-DO-PROJETO";
pub const TEAM_MEMBER: &str = "INTEGRANTES-DO-PROJETO";
pub const RESPONSIBLE_FLAG: &str = "FLAG-RESPONSAVEL";
pub const MEMBER_ID: &str = "NRO-ID-CNPQ";
pub const YES: &str = "SIM";
pub const PROJECT_FUNDERS: &str = "FINANCIADORES-DO-PROJETO";
pub const PROJECT_FUNDER: &str = "FINANCIADOR-DO-PROJETO";
pub const INSTITUTION_CODE: &str = "CODIGO-INSTITUICAO";
pub const NATURE_RESEARCH: &str = "PESQUISA";
pub const NATURE_DEVELOPMENT: &str = "DESENVOLVIMENTO";

// Bibliographic production
pub const BIBLIOGRAPHIC: &str = "PRODUCAO-BIBLIOGRAFICA";
pub const ARTICLES: &str = "ARTIGOS-PUBLICADOS";
pub const ARTICLE: &str = "ARTIGO-PUBLICADO";
pub const ARTICLE_DATA: &str = "DADOS-BASICOS-DO-ARTIGO";
pub const ARTICLE_YEAR: &str = "ANO-DO-ARTIGO";
pub const EVENT_PAPERS: &str = "TRABALHOS-EM-EVENTOS";
pub const EVENT_PAPER: &str = "TRABALHO-EM-EVENTOS";
pub const EVENT_PAPER_DATA: &str = "DADOS-BASICOS-DO-TRABALHO";
pub const EVENT_PAPER_DETAIL: &str = "DETALHAMENTO-DO-TRABALHO";
pub const EVENT_PAPER_YEAR: &str = "ANO-DO-TRABALHO";
pub const EVENT_SCOPE: &str = "CLASSIFICACAO-DO-EVENTO";
pub const BOOKS_AND_CHAPTERS: &str = "LIVROS-E-CAPITULOS";
pub const BOOKS: &str = "LIVROS-PUBLICADOS-OU-ORGANIZADOS";
pub const BOOK: &str = "LIVRO-PUBLICADO-OU-ORGANIZADO";
pub const BOOK_DATA: &str = "DADOS-BASICOS-DO-LIVRO";
pub const BOOK_DETAIL: &str = "DETALHAMENTO-DO-LIVRO";
pub const BOOK_TYPE: &str = "TIPO";
pub const CHAPTERS: &str = "CAPITULOS-DE-LIVROS-PUBLICADOS";
pub const CHAPTER: &str = "CAPITULO-DE-LIVRO-PUBLICADO";
pub const CHAPTER_DATA: &str = "DADOS-BASICOS-DO-CAPITULO";
pub const OTHER_BIBLIOGRAPHIC: &str = "DEMAIS-TIPOS-DE-PRODUCAO-BIBLIOGRAFICA";
pub const TRANSLATION: &str = "TRADUCAO";
pub const TRANSLATION_DATA: &str = "DADOS-BASICOS-DA-TRADUCAO";
pub const TRANSLATION_DETAIL: &str = "DETALHAMENTO-DA-TRADUCAO";

// Technical production
pub const TECHNICAL: &str = "PRODUCAO-TECNICA";
pub const SOFTWARE: &str = "SOFTWARE";
pub const SOFTWARE_DATA: &str = "DADOS-BASICOS-DO-SOFTWARE";
pub const PATENT: &str = "PATENTE";
pub const PATENT_DETAIL: &str = "DETALHAMENTO-DA-PATENTE";
pub const PATENT_REGISTRY: &str = "REGISTRO-OU-PATENTE";
pub const FILING_DATE: &str = "DATA-PEDIDO-DE-DEPOSITO";
pub const GRANT_DATE: &str = "DATA-DE-CONCESSAO";
pub const TECH_PRODUCT: &str = "PRODUTO-TECNOLOGICO";
pub const TECH_PRODUCT_DATA: &str = "DADOS-BASICOS-DO-PRODUTO-TECNOLOGICO";
pub const PROCESS: &str = "PROCESSOS-OU-TECNICAS";
pub const PROCESS_DATA: &str = "DADOS-BASICOS-DO-PROCESSOS-OU-TECNICAS";
pub const TECH_REPORT: &str = "TRABALHO-TECNICO";
pub const TECH_REPORT_DATA: &str = "DADOS-BASICOS-DO-TRABALHO-TECNICO";

// Other production
pub const OTHER_PRODUCTION: &str = "OUTRA-PRODUCAO";
pub const ARTISTIC: &str = "PRODUCAO-ARTISTICA-CULTURAL";
pub const PRESENTATION: &str = "APRESENTACAO-DE-OBRA-ARTISTICA";
pub const PRESENTATION_DATA: &str = "DADOS-BASICOS-DA-APRESENTACAO-DE-OBRA-ARTISTICA";
pub const COMPOSITION: &str = "COMPOSICAO-MUSICAL";
pub const COMPOSITION_DATA: &str = "DADOS-BASICOS-DA-COMPOSICAO-MUSICAL";
pub const VISUAL_ART: &str = "OBRA-DE-ARTES-VISUAIS";
pub const VISUAL_ART_DATA: &str = "DADOS-BASICOS-DA-OBRA-DE-ARTES-VISUAIS";
pub const ADVISING: &str = "ORIENTACOES-CONCLUIDAS";
pub const ADVISING_POST_DOCTORATE: &str = "ORIENTACOES-CONCLUIDAS-PARA-POS-DOUTORADO";
pub const ADVISING_POST_DOCTORATE_DATA: &str =
    "DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-POS-DOUTORADO";
pub const ADVISING_DOCTORATE: &str = "ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO";
pub const ADVISING_DOCTORATE_DATA: &str = "DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO";
pub const ADVISING_MASTERS: &str = "ORIENTACOES-CONCLUIDAS-PARA-MESTRADO";
pub const ADVISING_MASTERS_DATA: &str = "DADOS-BASICOS-DE-ORIENTACOES-CONCLUIDAS-PARA-MESTRADO";
pub const ADVISING_OTHER: &str = "OUTRAS-ORIENTACOES-CONCLUIDAS";
pub const ADVISING_OTHER_DATA: &str = "DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS";
